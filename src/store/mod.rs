//! Shared application state for the weather UI.
//!
//! One [`WeatherStore`] is created at startup and passed to every component
//! that reads or writes the search flow.

mod store;

pub use store::WeatherStore;
