//! Task list management.
//!
//! Tasks are created, edited, completed and deleted through a [`TaskBoard`],
//! which groups them into Today, Upcoming and Completed buckets and keeps a
//! single edit draft. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! [`TaskBoard`]: services::TaskBoard

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
