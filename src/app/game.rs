// This file is part of Bouncy.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::marker::ClickMarkerPlugin;
use crate::gameplay::spawn::BallSpawnPlugin;
use crate::interaction::input::PointerPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::attractor::CursorAttractorPlugin;
use crate::physics::boundary::BoundaryPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            BoundaryPlugin,
            PointerPlugin,
            CursorAttractorPlugin,
            BallSpawnPlugin,
            ClickMarkerPlugin,

            ConfigHotReloadPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}
