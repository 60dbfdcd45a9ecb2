use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use bevy_rapier2d::prelude::*;

use crate::core::components::Ball;
use crate::core::config::{AttractorConfig, GameConfig};
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::input::PointerState;

// ============================= Cursor Field Tunables =============================
/// Z-depth for the field icon (balls render at z=0, markers at z=40).
pub const CURSOR_FIELD_Z: f32 = 80.0;
/// Per-frame acceleration clamp (safety for extreme strengths)
pub const CURSOR_FIELD_MAX_ACCEL: f32 = 25_000.0;
/// Icon radius for the field visual.
pub const CURSOR_FIELD_ICON_RADIUS: f32 = 24.0;

/// Distance falloff applied to the field acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Falloff {
    None,
    InverseLinear,
    InverseSquare,
    SmoothEdge,
}
impl Falloff {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "None" => Some(Self::None),
            "InverseLinear" => Some(Self::InverseLinear),
            "InverseSquare" => Some(Self::InverseSquare),
            "SmoothEdge" => Some(Self::SmoothEdge),
            _ => None,
        }
    }
}

/// The radial force field that chases the pointer.
#[derive(Component, Debug, Clone, Reflect)]
pub struct CursorField {
    pub strength: f32,
    pub radius: f32, // <=0 => infinite
    pub falloff: Falloff,
    pub enabled: bool,
    /// Exponential smoothing rate (1/s); higher snaps harder to the cursor.
    pub smoothing: f32,
    pub radius2: f32, // cached squared radius (0 if infinite)
}
impl CursorField {
    fn from_config(c: &AttractorConfig) -> Self {
        let falloff = Falloff::from_str(&c.falloff).unwrap_or(Falloff::InverseLinear);
        let r2 = if c.radius > 0.0 { c.radius * c.radius } else { 0.0 };
        Self {
            strength: c.strength.max(0.0),
            radius: c.radius,
            falloff,
            enabled: c.enabled,
            smoothing: c.smoothing.max(0.0),
            radius2: r2,
        }
    }
}

/// Event on toggle (debug / overlay consumption)
#[derive(Event, Debug, Clone)]
pub struct FieldToggled {
    pub enabled: bool,
}

pub struct CursorAttractorPlugin;
impl Plugin for CursorAttractorPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CursorField>()
            .add_event::<FieldToggled>()
            .add_systems(Startup, spawn_cursor_field)
            .add_systems(
                Update,
                (
                    toggle_field_on_key.in_set(PrePhysicsSet),
                    follow_pointer.after(toggle_field_on_key).in_set(PrePhysicsSet),
                    apply_field_force.after(follow_pointer).in_set(PrePhysicsSet),
                ),
            );
    }
}

fn field_color(enabled: bool) -> Color {
    let alpha = if enabled { 0.85 } else { 0.25 };
    Color::srgba(0.2, 0.4, 0.95, alpha)
}

fn spawn_cursor_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let field = CursorField::from_config(&cfg.attractor);
    let mesh = meshes.add(Mesh::from(Circle {
        radius: CURSOR_FIELD_ICON_RADIUS,
    }));
    let mat = materials.add(field_color(field.enabled));
    info!(
        strength = field.strength,
        smoothing = field.smoothing,
        enabled = field.enabled,
        "cursor field spawned"
    );
    commands.spawn((
        field,
        Mesh2d::from(mesh),
        MeshMaterial2d(mat),
        Transform::from_xyz(0.0, 0.0, CURSOR_FIELD_Z),
        GlobalTransform::default(),
        Visibility::Visible,
    ));
}

/// KeyA flips the field on/off and dims the icon accordingly.
fn toggle_field_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut q_field: Query<(&mut CursorField, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut ew: EventWriter<FieldToggled>,
) {
    if !keys.just_pressed(KeyCode::KeyA) {
        return;
    }
    for (mut field, mat_handle) in q_field.iter_mut() {
        field.enabled = !field.enabled;
        if let Some(mat) = materials.get_mut(&mat_handle.0) {
            mat.color = field_color(field.enabled);
        }
        ew.write(FieldToggled {
            enabled: field.enabled,
        });
        info!(enabled = field.enabled, "cursor field toggled");
    }
}

/// Chase the last known pointer position with exponential smoothing. A
/// disabled field still tracks so re-enabling feels continuous; when the
/// cursor leaves the window the field holds its last smoothed position.
pub fn follow_pointer(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut q_field: Query<(&mut Transform, &CursorField)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let Some(target) = pointer.world_pos else {
        return;
    };
    for (mut tf, field) in q_field.iter_mut() {
        let pos = tf.translation.truncate();
        let next = if field.smoothing > 0.0 {
            let blend = 1.0 - (-field.smoothing * dt).exp();
            pos + (target - pos) * blend
        } else {
            target
        };
        tf.translation.x = next.x;
        tf.translation.y = next.y;
    }
}

pub fn apply_field_force(
    time: Res<Time>,
    q_field: Query<(&Transform, &CursorField)>,
    mut q_balls: Query<(&Transform, &mut Velocity), (With<Ball>, Without<CursorField>)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    for (f_tf, field) in q_field.iter() {
        if !field.enabled || field.strength <= 0.0 {
            continue;
        }
        let fpos = f_tf.translation.truncate();
        for (b_tf, mut vel) in q_balls.iter_mut() {
            let bpos = b_tf.translation.truncate();
            let dir = fpos - bpos;
            let dist2 = dir.length_squared();
            if dist2 < 1e-8 {
                continue;
            }
            if field.radius2 > 0.0 && dist2 > field.radius2 {
                continue;
            }
            let dist = dist2.sqrt();
            let base = field.strength;
            let scalar = match field.falloff {
                Falloff::None => base,
                Falloff::InverseLinear => base / (1.0 + dist),
                Falloff::InverseSquare => base / (1.0 + dist2),
                Falloff::SmoothEdge => {
                    if field.radius > 0.0 {
                        let t = (1.0 - dist / field.radius).clamp(0.0, 1.0);
                        base * (t * t * (3.0 - 2.0 * t))
                    } else {
                        base
                    }
                }
            };
            let mut accel = dir.normalize() * scalar;
            if accel.length() > CURSOR_FIELD_MAX_ACCEL {
                accel = accel.normalize() * CURSOR_FIELD_MAX_ACCEL;
            }
            vel.linvel += accel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn test_field(falloff: Falloff) -> CursorField {
        CursorField {
            strength: 100.0,
            radius: 0.0,
            falloff,
            enabled: true,
            smoothing: 8.0,
            radius2: 0.0,
        }
    }

    fn app_with_time(dt: f32) -> App {
        let mut app = App::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(dt));
        app.insert_resource(time);
        app
    }

    #[test]
    fn pulls_ball_toward_field() {
        let mut app = app_with_time(0.016);
        app.world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, 0.0), test_field(Falloff::None)));
        let ball = app
            .world_mut()
            .spawn((
                Ball,
                Transform::from_xyz(100.0, 0.0, 0.0),
                Velocity::linear(Vec2::ZERO),
            ))
            .id();
        app.world_mut()
            .run_system_once(apply_field_force)
            .expect("system runs");
        let vel = app.world().get::<Velocity>(ball).unwrap();
        assert!(
            vel.linvel.x < 0.0,
            "velocity should point toward the field (negative x), got {:?}",
            vel.linvel
        );
    }

    #[test]
    fn disabled_field_applies_nothing() {
        let mut app = app_with_time(0.016);
        let mut field = test_field(Falloff::None);
        field.enabled = false;
        app.world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, 0.0), field));
        let ball = app
            .world_mut()
            .spawn((
                Ball,
                Transform::from_xyz(100.0, 0.0, 0.0),
                Velocity::linear(Vec2::ZERO),
            ))
            .id();
        app.world_mut()
            .run_system_once(apply_field_force)
            .expect("system runs");
        let vel = app.world().get::<Velocity>(ball).unwrap();
        assert_eq!(vel.linvel, Vec2::ZERO, "disabled field must not push balls");
    }

    #[test]
    fn ball_at_field_center_gets_no_force() {
        let mut app = app_with_time(0.016);
        app.world_mut()
            .spawn((Transform::from_xyz(50.0, 50.0, 0.0), test_field(Falloff::InverseSquare)));
        let ball = app
            .world_mut()
            .spawn((
                Ball,
                Transform::from_xyz(50.0, 50.0, 0.0),
                Velocity::linear(Vec2::ZERO),
            ))
            .id();
        app.world_mut()
            .run_system_once(apply_field_force)
            .expect("system runs");
        let vel = app.world().get::<Velocity>(ball).unwrap();
        assert!(vel.linvel.is_finite(), "no NaN from zero-distance normalize");
        assert_eq!(vel.linvel, Vec2::ZERO);
    }

    #[test]
    fn smoothing_moves_field_partway_to_pointer() {
        let mut app = app_with_time(0.1);
        app.insert_resource(PointerState {
            world_pos: Some(Vec2::new(200.0, 0.0)),
            ..Default::default()
        });
        let field = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, CURSOR_FIELD_Z), test_field(Falloff::None)))
            .id();
        app.world_mut()
            .run_system_once(follow_pointer)
            .expect("system runs");
        let x = app.world().get::<Transform>(field).unwrap().translation.x;
        assert!(
            x > 0.0 && x < 200.0,
            "field should move part of the way toward the pointer, got x={x}"
        );
        // blend = 1 - exp(-0.8) ~= 0.5507
        let expected = 200.0 * (1.0 - (-0.8f32).exp());
        assert!(
            (x - expected).abs() < 1.0,
            "exponential smoothing step expected ~{expected}, got {x}"
        );
    }
}
