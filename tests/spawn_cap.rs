use bevy::prelude::*;
use bevy::sprite::ColorMaterial;

use bouncy::core::components::{Ball, SpawnStamp};
use bouncy::core::config::config::GameConfig;
use bouncy::gameplay::spawn::BallSpawnPlugin;
use bouncy::interaction::input::PointerState;

fn spawn_test_app(max_count: usize) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let mut cfg = GameConfig::default();
    cfg.balls.max_count = max_count;
    app.insert_resource(cfg);
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<ColorMaterial>::default());
    app.init_resource::<PointerState>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(BallSpawnPlugin);
    // First update runs Startup (circle mesh + drag timer resources).
    app.update();
    app
}

#[test]
fn keyboard_spawns_are_capped_oldest_first() {
    let mut app = spawn_test_app(3);
    // Without the input plugin nothing clears just_pressed, so every update
    // spawns another keyboard ball.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    for _ in 0..6 {
        app.update();
    }
    let world = app.world_mut();
    let count = world.query_filtered::<(), With<Ball>>().iter(world).count();
    assert_eq!(count, 3, "live balls must never exceed balls.max_count");

    let mut stamps: Vec<u64> = world
        .query::<&SpawnStamp>()
        .iter(world)
        .map(|s| s.0)
        .collect();
    stamps.sort_unstable();
    assert_eq!(stamps, vec![3, 4, 5], "the oldest stamps are evicted first");
}

#[test]
fn keyboard_spawn_aims_at_last_pointer_position() {
    let mut app = spawn_test_app(16);
    app.world_mut().resource_mut::<PointerState>().world_pos = Some(Vec2::new(300.0, -150.0));
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    let world = app.world_mut();
    let mut q = world.query_filtered::<&bevy_rapier2d::prelude::Velocity, With<Ball>>();
    let vel = q.iter(world).next().expect("one ball spawned").linvel;
    assert!(vel.x > 0.0 && vel.y < 0.0, "velocity should aim at the pointer, got {vel:?}");
}

#[test]
fn pointer_spawn_skipped_without_cursor() {
    let mut app = spawn_test_app(16);
    // Pointer held but no position ever seen: nothing to anchor a spawn to.
    {
        let mut pointer = app.world_mut().resource_mut::<PointerState>();
        pointer.held = true;
        pointer.just_pressed = true;
        pointer.world_pos = None;
    }
    app.update();
    let world = app.world_mut();
    let count = world.query_filtered::<(), With<Ball>>().iter(world).count();
    assert_eq!(count, 0, "no cursor position -> no pointer spawns");
}
