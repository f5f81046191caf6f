pub mod config;
pub mod driver;
pub mod events;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod sim;

/// Number of completed simulation steps since startup or the last reset.
pub type Generation = u64;
