use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Armed only when `window.autoClose` is positive; counts down wall time and
/// then asks the app to exit. Handy for headless smoke runs.
#[derive(Resource, Deref, DerefMut)]
struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline).add_systems(
            Update,
            exit_when_elapsed.run_if(resource_exists::<SessionDeadline>),
        );
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "session will auto-close");
        commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn exit_when_elapsed(
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if deadline.tick(time.delta()).just_finished() {
        info!("auto-close deadline reached, exiting");
        ev_exit.write(AppExit::Success);
    }
}
