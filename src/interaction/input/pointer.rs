use bevy::prelude::*;

use crate::core::system::system_order::PrePhysicsSet;

/// Per-frame pointer snapshot shared by the spawn, marker and attractor
/// systems. `world_pos` keeps the last known position when the cursor leaves
/// the window.
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    pub world_pos: Option<Vec2>,
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Update, track_pointer.before(PrePhysicsSet));
    }
}

pub fn cursor_world_pos(
    _window: &Window,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

pub fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        let pos = touch.position();
        return cursor_world_pos(window, camera_q, pos);
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(window, camera_q, cursor)
}

pub fn track_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut state: ResMut<PointerState>,
) {
    state.just_pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    state.just_released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    state.held = buttons.pressed(MouseButton::Left) || touches.iter().next().is_some();
    let Ok(window) = windows_q.single() else {
        return;
    };
    if let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) {
        state.world_pos = Some(world_pos);
    }
}
