use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub transparent: bool,
    pub decorations: bool,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Bouncy".into(),
            transparent: true,
            decorations: true,
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -600.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    pub restitution: f32,
}
impl Default for BounceConfig {
    fn default() -> Self {
        Self { restitution: 0.85 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Hard cap on live balls; oldest spawns are evicted first.
    pub max_count: usize,
    /// Seconds between spawns while the pointer is held and moving.
    pub drag_spawn_interval: f32,
    /// Scales the center->cursor velocity of keyboard spawns.
    pub keyboard_speed_scale: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            max_count: 256,
            drag_spawn_interval: 0.05,
            keyboard_speed_scale: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AttractorConfig {
    pub enabled: bool,
    /// Base radial acceleration (px/s^2) before falloff.
    pub strength: f32,
    /// Influence radius; <= 0 means infinite.
    pub radius: f32,
    /// One of: "None", "InverseLinear", "InverseSquare", "SmoothEdge".
    pub falloff: String,
    /// Exponential smoothing rate (1/s) for the field chasing the cursor.
    pub smoothing: f32,
}
impl Default for AttractorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 900.0,
            radius: 0.0,
            falloff: "InverseLinear".into(),
            smoothing: 8.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Side length of the square click marker.
    pub size: f32,
    /// Spin speed in radians per second.
    pub spin_rate: f32,
    pub hold_duration: f32,
    pub fade_duration: f32,
}
impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            size: 64.0,
            spin_rate: std::f32::consts::PI,
            hold_duration: 0.5,
            fade_duration: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub bounce: BounceConfig,
    pub balls: BallConfig,
    pub attractor: AttractorConfig,
    pub marker: MarkerConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            bounce: Default::default(),
            balls: Default::default(),
            attractor: Default::default(),
            marker: Default::default(),
            rapier_debug: false,
        }
    }
}

pub const FALLOFF_NAMES: [&str; 4] = ["None", "InverseLinear", "InverseSquare", "SmoothEdge"];

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    /// Merge any number of RON files over the defaults. Later files override
    /// earlier ones key-by-key; unreadable or unparsable files become entries
    /// in the error list instead of aborting.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.gravity.y < -2000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        if !(0.0..=1.5).contains(&self.bounce.restitution) {
            w.push(format!(
                "restitution {} outside recommended 0..1.5",
                self.bounce.restitution
            ));
        }
        if self.balls.radius <= 0.0 {
            w.push("balls.radius must be > 0".into());
        }
        if self.balls.max_count == 0 {
            w.push("balls.max_count is 0; every spawn is culled immediately".into());
        }
        if self.balls.max_count > 50_000 {
            w.push(format!(
                "balls.max_count {} very high; performance may suffer",
                self.balls.max_count
            ));
        }
        if self.balls.drag_spawn_interval <= 0.0 {
            w.push(format!(
                "balls.drag_spawn_interval {} not positive -> spawns every frame while dragging",
                self.balls.drag_spawn_interval
            ));
        }
        if self.balls.keyboard_speed_scale < 0.0 {
            w.push("balls.keyboard_speed_scale negative -> keyboard spawns shoot away from cursor".into());
        }
        if self.attractor.enabled {
            let at = &self.attractor;
            if at.strength <= 0.0 {
                w.push("attractor.strength must be > 0 when enabled".into());
            }
            if !FALLOFF_NAMES.contains(&at.falloff.as_str()) {
                w.push(format!(
                    "attractor.falloff \"{}\" unknown (expected one of {:?}); falling back to InverseLinear",
                    at.falloff, FALLOFF_NAMES
                ));
            }
            if at.falloff == "SmoothEdge" && at.radius <= 0.0 {
                w.push("attractor.falloff SmoothEdge with infinite radius degenerates to None".into());
            }
            if at.smoothing <= 0.0 {
                w.push(format!(
                    "attractor.smoothing {} not positive -> field snaps to the cursor",
                    at.smoothing
                ));
            }
        }
        if self.marker.size <= 0.0 {
            w.push("marker.size must be > 0".into());
        }
        if self.marker.hold_duration < 0.0 || self.marker.fade_duration < 0.0 {
            w.push("marker durations must be >= 0".into());
        }
        if self.marker.hold_duration + self.marker.fade_duration <= 0.0 {
            w.push("marker lifetime is zero; markers despawn on their first frame".into());
        }
        w
    }
}
