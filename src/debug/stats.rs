use bevy::prelude::*;

use crate::core::components::Ball;
use crate::gameplay::marker::ClickMarker;
use crate::physics::attractor::CursorField;

#[derive(Resource, Default, Debug)]
pub struct DebugStats {
    pub ball_count: usize,
    pub marker_count: usize,
    pub field_enabled: bool,
    pub field_pos: Vec2,
}

pub fn debug_stats_collect_system(
    mut stats: ResMut<DebugStats>,
    q_balls: Query<(), With<Ball>>,
    q_markers: Query<(), With<ClickMarker>>,
    q_field: Query<(&Transform, &CursorField)>,
) {
    stats.ball_count = q_balls.iter().count();
    stats.marker_count = q_markers.iter().count();
    if let Some((tf, field)) = q_field.iter().next() {
        stats.field_enabled = field.enabled;
        stats.field_pos = tf.translation.truncate();
    }
}
