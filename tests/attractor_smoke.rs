use bevy::prelude::*;
use bevy::sprite::ColorMaterial;
use bevy_rapier2d::prelude::Velocity;

use bouncy::core::components::Ball;
use bouncy::core::config::config::GameConfig;
use bouncy::interaction::input::PointerState;
use bouncy::physics::attractor::{CursorAttractorPlugin, CursorField};

fn attractor_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<ColorMaterial>::default());
    app.init_resource::<PointerState>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(CursorAttractorPlugin);
    // Startup spawns the field entity at the origin.
    app.update();
    app
}

fn field_x(app: &mut App) -> f32 {
    let world = app.world_mut();
    let mut q = world.query_filtered::<&Transform, With<CursorField>>();
    q.iter(world).next().expect("field exists").translation.x
}

#[test]
fn field_chases_pointer_with_smoothing() {
    let mut app = attractor_app();
    app.world_mut().resource_mut::<PointerState>().world_pos = Some(Vec2::new(200.0, 0.0));
    for _ in 0..3 {
        app.update();
    }
    let x = field_x(&mut app);
    assert!(
        x > 0.0 && x < 200.0,
        "field should be en route to the pointer, got x={x}"
    );
}

#[test]
fn balls_are_pulled_toward_the_field() {
    let mut app = attractor_app();
    // Pointer far to the left; field starts at the origin and drifts left,
    // so the pull on a right-hand ball must point left.
    app.world_mut().resource_mut::<PointerState>().world_pos = Some(Vec2::new(-200.0, 0.0));
    let ball = app
        .world_mut()
        .spawn((
            Ball,
            Transform::from_xyz(100.0, 0.0, 0.0),
            Velocity::linear(Vec2::ZERO),
        ))
        .id();
    for _ in 0..3 {
        app.update();
    }
    let vel = app.world().get::<Velocity>(ball).unwrap();
    assert!(
        vel.linvel.x < 0.0,
        "ball velocity should point toward the field, got {:?}",
        vel.linvel
    );
}

#[test]
fn key_a_toggles_the_field() {
    let mut app = attractor_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyA);
    app.update();
    let world = app.world_mut();
    let mut q = world.query::<&CursorField>();
    let field = q.iter(world).next().expect("field exists");
    assert!(
        !field.enabled,
        "default-enabled field should be off after one KeyA press"
    );
}
