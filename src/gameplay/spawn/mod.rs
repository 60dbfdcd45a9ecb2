pub mod spawn;

pub use spawn::{BallSpawnPlugin, CircleMesh, SpawnCounter};
