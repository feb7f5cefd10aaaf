//! The reactive cell primitive.
//!
//! This module provides the core building block for shared UI state:
//! - Cells: single-slot containers with subscriber notification
//! - Subscriptions: handles for removing registered callbacks
//! - Read-only views for components that observe but never write

mod cell;
mod read;

pub use cell::{Cell, Subscription};
pub use read::ReadCell;
