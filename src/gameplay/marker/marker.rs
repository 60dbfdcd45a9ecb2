use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::input::PointerState;

/// Z-depth for markers: above balls (z=0), below the cursor field icon (z=80).
pub const MARKER_Z: f32 = 40.0;

#[derive(Component)]
pub struct ClickMarker;

/// Which pointer phase produced the marker; decides its tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPhase {
    Down,
    Drag,
    Up,
}
impl MarkerPhase {
    fn color(self) -> Color {
        match self {
            MarkerPhase::Down => Color::srgba(0.2, 0.9, 0.3, 0.9),
            MarkerPhase::Drag => Color::srgba(0.25, 0.5, 0.95, 0.9),
            MarkerPhase::Up => Color::srgba(0.95, 0.25, 0.3, 0.9),
        }
    }
}

/// Spin for the whole life, hold opaque, fade to zero, despawn.
#[derive(Component, Debug, Clone)]
pub struct MarkerLifecycle {
    pub elapsed: f32,
    pub hold_duration: f32,
    pub fade_duration: f32,
    pub spin_rate: f32,
    pub alpha_base: f32,
}
impl MarkerLifecycle {
    pub fn total(&self) -> f32 {
        self.hold_duration + self.fade_duration
    }
}

/// Shared unit square mesh for markers.
#[derive(Resource, Deref, Clone)]
pub struct MarkerMesh(pub Handle<Mesh>);

/// Last drag-marker position, so dragging leaves a spaced trail instead of a
/// marker per frame.
#[derive(Resource, Default, Debug)]
pub struct MarkerTrail {
    pub last: Option<Vec2>,
}

pub struct ClickMarkerPlugin;

impl Plugin for ClickMarkerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MarkerTrail>()
            .add_systems(Startup, setup_marker_mesh)
            .add_systems(
                Update,
                (
                    spawn_click_markers.in_set(PrePhysicsSet),
                    update_marker_lifecycle.after(spawn_click_markers),
                ),
            );
    }
}

fn setup_marker_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    commands.insert_resource(MarkerMesh(handle));
}

fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

pub fn spawn_marker_entity(
    commands: &mut Commands,
    mesh: &Handle<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    cfg: &GameConfig,
    pos: Vec2,
    phase: MarkerPhase,
) -> Entity {
    let color = phase.color();
    let alpha_base = color.to_srgba().alpha;
    let material = materials.add(color);
    commands
        .spawn((
            ClickMarker,
            MarkerLifecycle {
                elapsed: 0.0,
                hold_duration: cfg.marker.hold_duration.max(0.0),
                fade_duration: cfg.marker.fade_duration.max(0.0),
                spin_rate: cfg.marker.spin_rate,
                alpha_base,
            },
            Mesh2d::from(mesh.clone()),
            MeshMaterial2d(material),
            Transform::from_translation(pos.extend(MARKER_Z))
                .with_scale(Vec3::splat(cfg.marker.size)),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .id()
}

fn spawn_click_markers(
    mut commands: Commands,
    pointer: Res<PointerState>,
    mesh: Res<MarkerMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut trail: ResMut<MarkerTrail>,
    cfg: Res<GameConfig>,
) {
    let Some(pos) = pointer.world_pos else {
        return;
    };
    if pointer.just_pressed {
        spawn_marker_entity(&mut commands, &mesh.0, &mut materials, &cfg, pos, MarkerPhase::Down);
        trail.last = Some(pos);
    } else if pointer.held {
        // Space the drag trail by a quarter marker so it reads as a path.
        let spacing = cfg.marker.size * 0.25;
        let moved_enough = trail
            .last
            .map(|last| pos.distance_squared(last) >= spacing * spacing)
            .unwrap_or(true);
        if moved_enough {
            spawn_marker_entity(&mut commands, &mesh.0, &mut materials, &cfg, pos, MarkerPhase::Drag);
            trail.last = Some(pos);
        }
    }
    if pointer.just_released {
        spawn_marker_entity(&mut commands, &mesh.0, &mut materials, &cfg, pos, MarkerPhase::Up);
        trail.last = None;
    }
}

pub fn update_marker_lifecycle(
    time: Res<Time>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut MarkerLifecycle, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
) {
    if q.is_empty() {
        return;
    }
    let dt = time.delta_secs();
    for (entity, mut life, mut tf, mat_handle) in q.iter_mut() {
        life.elapsed += dt;
        tf.rotate_z(life.spin_rate * dt);

        let total = life.total();
        if life.elapsed >= total {
            // Covers the large-dt overshoot case too.
            commands.entity(entity).despawn();
            continue;
        }
        if life.elapsed > life.hold_duration {
            let fade_t = smoothstep(
                (life.elapsed - life.hold_duration) / life.fade_duration.max(f32::EPSILON),
            );
            if let Some(mat) = materials.get_mut(&mat_handle.0) {
                let c = mat.color.to_srgba();
                let new_alpha = (life.alpha_base * (1.0 - fade_t)).clamp(0.0, life.alpha_base);
                mat.color = Color::srgba(c.red, c.green, c.blue, new_alpha);
            }
        }
    }
}
