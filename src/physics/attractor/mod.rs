pub mod attractor;

pub use attractor::{CursorAttractorPlugin, CursorField, Falloff, FieldToggled};
