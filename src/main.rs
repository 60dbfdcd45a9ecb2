use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use bouncy::interaction::session::config_hot_reload::ConfigReloadSettings;
use bouncy::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(about = "Transparent-window bouncing ball playground", version, author)]
struct Args {
    /// Base RON config path.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Optional override file layered on top of the base config.
    #[arg(long)]
    local: Option<PathBuf>,
}

/// Stashes config load/validation output until the Bevy logger is live.
#[derive(Resource, Debug, Default)]
struct ConfigReport {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn log_config_report(report: Res<ConfigReport>) {
    for path in &report.used {
        info!("CONFIG loaded: {path}");
    }
    for e in &report.errors {
        warn!("CONFIG load issue: {e}");
    }
    for w in &report.warnings {
        warn!("CONFIG warning: {w}");
    }
}

fn main() {
    let args = Args::parse();
    let mut paths = vec![args.config];
    if let Some(local) = args.local {
        paths.push(local);
    }
    // Missing/broken files degrade to defaults; everything gets logged once
    // the app is up.
    let (cfg, used, errors) = GameConfig::load_layered(&paths);
    let report = ConfigReport {
        used,
        errors,
        warnings: cfg.validate(),
    };

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .insert_resource(ConfigReloadSettings {
            paths,
            interval_secs: 0.5,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                transparent: cfg.window.transparent,
                decorations: cfg.window.decorations,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_systems(Startup, log_config_report)
        .run();
}
