pub mod boundary;

pub use boundary::{BoundaryLoop, BoundaryPlugin};
