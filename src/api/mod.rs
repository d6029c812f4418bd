//! # API Module
//!
//! Business logic and request/response shaping for the two resources.
//!
//! ## Modules
//!
//! - [`pet`] - Pet CRUD with cascading delete
//! - [`task`] - Task CRUD, due-date range filtering and status transitions

pub mod pet;
pub mod task;
