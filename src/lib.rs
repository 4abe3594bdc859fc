//! Tasklist: core of a single-user to-do list.
//!
//! This crate owns the task collection, derives the Today, Upcoming and
//! Completed views, and mediates the edit draft for a presentation layer that
//! renders them.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values and classification rules
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete stores (in-memory, `SQLite`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage and the task board state manager

pub mod task;
