pub mod config;

pub use config::{
    AttractorConfig, BallConfig, BounceConfig, GameConfig, GravityConfig, MarkerConfig,
    WindowConfig,
};
