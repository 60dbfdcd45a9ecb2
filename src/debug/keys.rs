use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

use super::logging::DebugState;

/// F2 toggles the Rapier wireframe overlay, F3 forces an immediate SIM log.
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if keys.just_pressed(KeyCode::F2) {
        if let Some(mut c) = ctx {
            c.enabled = !c.enabled;
            info!(enabled = c.enabled, "rapier wireframe toggled");
        }
    }
    if keys.just_pressed(KeyCode::F3) {
        state.force_log = true;
    }
}
