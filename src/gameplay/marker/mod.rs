pub mod marker;

pub use marker::{ClickMarker, ClickMarkerPlugin, MarkerLifecycle, MarkerPhase};
