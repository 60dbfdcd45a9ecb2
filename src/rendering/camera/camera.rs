use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
    if cfg.window.transparent {
        // Nothing cleared behind the playground, so the desktop shows through
        // the transparent window.
        commands.insert_resource(ClearColor(Color::NONE));
    }
}
