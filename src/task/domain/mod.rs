//! Domain model for the to-do list.
//!
//! Tasks, the single edit draft, bucket classification and the display mode
//! live here, free of any storage or runtime concerns.

mod bucket;
mod draft;
mod error;
mod ids;
mod task;

pub use bucket::{Bucket, Buckets, partition_at};
pub use draft::{DisplayMode, Draft};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, timestamp_from_millis};
