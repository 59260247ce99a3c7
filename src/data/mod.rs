//! Employee data loading.
//!
//! Reads the per-subsidiary employee roster from JSON. The loader only
//! checks shape and names; wage values are validated by the calculator.

mod loader;

pub use loader::{DEFAULT_ROSTER_PATH, RosterLoader};
