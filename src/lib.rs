//! # Vane
//!
//! Shared reactive state for a client-side weather UI.
//!
//! Vane provides two levels of abstraction:
//!
//! ## Cells (Low-level primitive)
//!
//! A minimal observable-value primitive:
//! - `Cell<T>` - A single mutable slot that notifies subscribers when changed
//! - `ReadCell<T>` - A read-only view of a cell
//! - `Subscription` - Handle for removing a registered callback
//!
//! ## WeatherStore (Application state)
//!
//! The state a weather search UI shares between components:
//! - `query` - The search term the user is typing
//! - `weather_data` - The most recently fetched payload, if any
//! - `error_message` - Error text from the last failed fetch
//!
//! All operations are synchronous and total: reads return the current value,
//! writes replace it and notify every subscriber before returning.

pub mod cell;
pub mod model;
pub mod store;

// Re-export main types for convenience
pub use cell::{Cell, ReadCell, Subscription};
pub use model::WeatherData;
pub use store::WeatherStore;
