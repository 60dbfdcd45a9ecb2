use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((RapierPhysicsPlugin::<NoUserData>::default(),))
            .add_systems(Startup, configure_gravity);
    }
}

fn configure_gravity(
    game_cfg: Res<GameConfig>,
    mut rapier_cfg_q: Query<&mut RapierConfiguration, With<DefaultRapierContext>>,
) {
    let Ok(mut rapier_cfg) = rapier_cfg_q.single_mut() else {
        warn!("no default Rapier context; gravity left at plugin default");
        return;
    };
    rapier_cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    info!(gravity_y = game_cfg.gravity.y, "configured world gravity");
}
