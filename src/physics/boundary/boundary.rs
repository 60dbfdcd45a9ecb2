use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

/// Marker for the single edge-loop entity that fences the play area.
#[derive(Component)]
pub struct BoundaryLoop;

pub struct BoundaryPlugin;

impl Plugin for BoundaryPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WindowResized>()
            .add_systems(Startup, spawn_initial_boundary)
            .add_systems(Update, rebuild_boundary_on_resize.in_set(PostPhysicsAdjustSet));
    }
}

/// Closed rectangular polyline centered on the origin (the camera looks at the
/// origin, so world center == window center).
fn edge_loop_collider(width: f32, height: f32) -> Collider {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let vertices = vec![
        Vect::new(-hw, -hh),
        Vect::new(hw, -hh),
        Vect::new(hw, hh),
        Vect::new(-hw, hh),
    ];
    // Explicit indices so the loop closes back onto the first vertex.
    let indices = vec![[0, 1], [1, 2], [2, 3], [3, 0]];
    Collider::polyline(vertices, Some(indices))
}

fn spawn_boundary(commands: &mut Commands, width: f32, height: f32) {
    commands.spawn((
        BoundaryLoop,
        RigidBody::Fixed,
        edge_loop_collider(width, height),
        Transform::default(),
        GlobalTransform::default(),
    ));
}

fn spawn_initial_boundary(
    mut commands: Commands,
    windows_q: Query<&Window>,
    cfg: Res<GameConfig>,
) {
    // Headless runs (tests, CI smoke) have no window entity; fall back to the
    // configured dimensions so physics still has a fence.
    let (width, height) = match windows_q.single() {
        Ok(window) => (window.width(), window.height()),
        Err(_) => (cfg.window.width, cfg.window.height),
    };
    if width <= 0.0 || height <= 0.0 {
        warn!(width, height, "degenerate window size; boundary not built");
        return;
    }
    spawn_boundary(&mut commands, width, height);
    info!(width, height, "boundary edge loop built");
}

fn rebuild_boundary_on_resize(
    mut commands: Commands,
    mut resize_events: EventReader<WindowResized>,
    existing: Query<Entity, With<BoundaryLoop>>,
) {
    // Several resize events can land in one frame; only the last size matters.
    let Some(last) = resize_events.read().last() else {
        return;
    };
    if last.width <= 0.0 || last.height <= 0.0 {
        warn!(
            width = last.width,
            height = last.height,
            "degenerate resize; keeping previous boundary"
        );
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    spawn_boundary(&mut commands, last.width, last.height);
    debug!(width = last.width, height = last.height, "boundary rebuilt after resize");
}
