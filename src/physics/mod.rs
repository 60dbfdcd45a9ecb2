pub mod attractor;
pub mod boundary;
pub mod rapier;
