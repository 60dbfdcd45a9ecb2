//! Debug module: runtime stats logging & wireframe toggles.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys;
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use logging::DebugState;
#[cfg(feature = "debug")]
pub use stats::DebugStats;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::render::{DebugRenderContext, RapierDebugRenderPlugin};

#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        fn apply_initial_wireframe(cfg: Res<GameConfig>, ctx: Option<ResMut<DebugRenderContext>>) {
            if let Some(mut c) = ctx {
                c.enabled = cfg.rapier_debug;
            }
        }

        app.add_plugins(RapierDebugRenderPlugin::default().disabled())
            .init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Startup, apply_initial_wireframe)
            .add_systems(
                Update,
                (
                    debug_key_input_system,
                    debug_stats_collect_system.in_set(PostPhysicsAdjustSet),
                    debug_logging_system
                        .in_set(PostPhysicsAdjustSet)
                        .after(debug_stats_collect_system),
                ),
            );
    }
}
