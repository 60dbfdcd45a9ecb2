use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Ball, BallCircleVisual, BallRadius, SpawnStamp};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::input::PointerState;

/// Shared unit-circle mesh (radius 0.5); ball visuals scale it to diameter.
#[derive(Resource, Deref, Clone)]
pub struct CircleMesh(pub Handle<Mesh>);

/// Monotonic source for `SpawnStamp` ordinals.
#[derive(Resource, Default, Debug)]
pub struct SpawnCounter(pub u64);
impl SpawnCounter {
    pub fn next(&mut self) -> SpawnStamp {
        let stamp = SpawnStamp(self.0);
        self.0 += 1;
        stamp
    }
}

/// Rate limiter for spawn-while-dragging.
#[derive(Resource, Deref, DerefMut)]
pub struct DragSpawnTimer(pub Timer);

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnCounter>()
            .add_systems(Startup, setup_spawn_resources)
            .add_systems(
                Update,
                (
                    pointer_spawn_balls.in_set(PrePhysicsSet),
                    keyboard_spawn_balls.in_set(PrePhysicsSet),
                    enforce_ball_cap
                        .after(pointer_spawn_balls)
                        .after(keyboard_spawn_balls)
                        .in_set(PrePhysicsSet),
                ),
            );
    }
}

fn setup_spawn_resources(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, cfg: Res<GameConfig>) {
    let handle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
    commands.insert_resource(CircleMesh(handle));
    commands.insert_resource(DragSpawnTimer(Timer::from_seconds(
        cfg.balls.drag_spawn_interval.max(0.0),
        TimerMode::Repeating,
    )));
}

pub fn random_ball_color(rng: &mut impl Rng) -> Color {
    Color::srgb(
        rng.gen::<f32>() * 0.9 + 0.1,
        rng.gen::<f32>() * 0.9 + 0.1,
        rng.gen::<f32>() * 0.9 + 0.1,
    )
}

/// Single creation path for every ball: dynamic body + ball collider on the
/// parent, circle mesh child scaled to diameter.
pub fn spawn_ball_entity(
    commands: &mut Commands,
    circle: &Handle<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    counter: &mut SpawnCounter,
    cfg: &GameConfig,
    pos: Vec2,
    vel: Vec2,
    color: Color,
) -> Entity {
    let radius = cfg.balls.radius;
    let material = materials.add(color);
    commands
        .spawn((
            Transform::from_translation(pos.extend(0.0)),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(radius),
            Velocity::linear(vel),
            Restitution::coefficient(cfg.bounce.restitution),
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            Ball,
            BallRadius(radius),
            counter.next(),
        ))
        .with_children(|parent| {
            parent.spawn((
                BallCircleVisual,
                Mesh2d::from(circle.clone()),
                MeshMaterial2d(material),
                Transform::from_scale(Vec3::splat(radius * 2.0)),
            ));
        })
        .id()
}

/// Mouse/touch spawning: one ball on press, one on release, and a
/// timer-limited stream while the pointer is held down.
fn pointer_spawn_balls(
    mut commands: Commands,
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut timer: ResMut<DragSpawnTimer>,
    circle: Res<CircleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut counter: ResMut<SpawnCounter>,
    cfg: Res<GameConfig>,
) {
    // Pick up hot-reloaded interval changes.
    let interval = cfg.balls.drag_spawn_interval.max(0.0);
    if (timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        timer.set_duration(std::time::Duration::from_secs_f32(interval));
    }
    let Some(pos) = pointer.world_pos else {
        return;
    };
    let mut rng = rand::thread_rng();
    if pointer.just_pressed {
        timer.reset();
        spawn_ball_entity(
            &mut commands,
            &circle.0,
            &mut materials,
            &mut counter,
            &cfg,
            pos,
            Vec2::ZERO,
            random_ball_color(&mut rng),
        );
    } else if pointer.held {
        timer.tick(time.delta());
        if timer.just_finished() {
            spawn_ball_entity(
                &mut commands,
                &circle.0,
                &mut materials,
                &mut counter,
                &cfg,
                pos,
                Vec2::ZERO,
                random_ball_color(&mut rng),
            );
        }
    }
    if pointer.just_released {
        spawn_ball_entity(
            &mut commands,
            &circle.0,
            &mut materials,
            &mut counter,
            &cfg,
            pos,
            Vec2::ZERO,
            random_ball_color(&mut rng),
        );
    }
}

/// Space spawns from the window center (world origin) with velocity aimed at
/// the last pointer position.
fn keyboard_spawn_balls(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    pointer: Res<PointerState>,
    circle: Res<CircleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut counter: ResMut<SpawnCounter>,
    cfg: Res<GameConfig>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let center = Vec2::ZERO;
    let target = pointer.world_pos.unwrap_or(center);
    let vel = (target - center) * cfg.balls.keyboard_speed_scale;
    let mut rng = rand::thread_rng();
    let entity = spawn_ball_entity(
        &mut commands,
        &circle.0,
        &mut materials,
        &mut counter,
        &cfg,
        center,
        vel,
        random_ball_color(&mut rng),
    );
    debug!(?entity, vel_x = vel.x, vel_y = vel.y, "keyboard ball spawned toward pointer");
}

/// Capped pool: evict oldest stamps first whenever the live ball count
/// exceeds `balls.max_count`.
pub fn enforce_ball_cap(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    q_balls: Query<(Entity, &SpawnStamp), With<Ball>>,
) {
    let max = cfg.balls.max_count;
    let count = q_balls.iter().count();
    if count <= max {
        return;
    }
    let mut stamped: Vec<(SpawnStamp, Entity)> = q_balls.iter().map(|(e, s)| (*s, e)).collect();
    stamped.sort_unstable_by_key(|(s, _)| *s);
    let excess = count - max;
    for (_, entity) in stamped.into_iter().take(excess) {
        commands.entity(entity).despawn();
    }
    debug!(evicted = excess, live = max, "ball cap enforced");
}
