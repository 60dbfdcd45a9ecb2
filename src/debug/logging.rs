use bevy::prelude::*;

use super::stats::DebugStats;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub time_accum: f32,
    pub log_interval: f32,
    pub force_log: bool,
}
impl Default for DebugState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 2.0,
            force_log: false,
        }
    }
}

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval && !state.force_log {
        return;
    }
    state.time_accum = 0.0;
    state.force_log = false;
    info!(
        "SIM t={:.3}s balls={} markers={} field=({:.1},{:.1}) field_on={}",
        time.elapsed_secs(),
        stats.ball_count,
        stats.marker_count,
        stats.field_pos.x,
        stats.field_pos.y,
        stats.field_enabled
    );
}
