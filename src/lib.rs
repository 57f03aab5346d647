// Deterministic Game of Life engine on a toroidal grid.
// Rendering, input and animation scheduling belong to the host driver,
// which talks to `Universe` through `snapshot()` and the mutators.

mod cell;
mod error;
mod patterns;
mod universe;

// Re-exports for convenience
pub use cell::Cell;
pub use error::UniverseError;
pub use patterns::{Pattern, presets};
pub use universe::Universe;
