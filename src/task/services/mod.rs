//! Application services for the to-do list.

mod board;
mod state;

pub use board::TaskBoard;
pub use state::{BoardConfig, BoardState, StoreNotice, StoreOperation};
