// Page configuration. Every field has a default matching the stock portfolio page,
// so a host can pass a partial JSON override to `start_with_config`.

use crate::error::{Error, Result};
use crate::particle::{Bounds, VelocityModel};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub hero: HeroConfig,
    pub map: MapConfig,
    pub timing: TimingConfig,
    pub reveal_threshold: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub field: FieldConfig,
    pub camera: CameraConfig,
    pub style: StyleConfig,
    /// Wrap update and render in console.time labels every frame.
    pub profile: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Edge length of the cube initial positions are drawn from, centered on the origin.
    pub spread: f64,
    /// Initial velocity components are drawn from [-max_speed, max_speed].
    pub max_speed: f64,
    pub bounds: Bounds,
    /// Pairs strictly closer than this get a connecting line.
    pub threshold: f64,
    /// Radians added to the scene's Y rotation each frame.
    pub rotation_per_frame: f64,
    pub velocity_model: VelocityModel,
    /// Above this many particles the edge scan switches to grid buckets.
    pub bucketed_scan_above: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: 100,
            spread: 15.0,
            max_speed: 0.01,
            bounds: Bounds::default(),
            threshold: 1.5,
            rotation_per_frame: 0.001,
            velocity_model: VelocityModel::Shared,
            bucketed_scan_above: 512,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Eye offset along +z, looking at the origin.
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 3.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// 0xRRGGBB shared by dots and lines.
    pub color: u32,
    pub point_opacity: f32,
    pub line_opacity: f32,
    /// Dot size in world units, attenuated by depth.
    pub point_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            color: 0x64ffda,
            point_opacity: 0.8,
            line_opacity: 0.15,
            point_size: 0.05,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container_id: String,
    /// [lat, lng]
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// HTML shown in the marker popup.
    pub popup: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            container_id: "map".to_owned(),
            center: [43.2609, -79.9192],
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "&copy; OpenStreetMap contributors".to_owned(),
            popup: "Kenil Sachapara<br>Hamilton, ON".to_owned(),
        }
    }
}

// Delays in milliseconds, i32 because that is what setTimeout takes
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub loader_fade_ms: i32,
    pub cursor_trail_ms: i32,
    pub filter_show_ms: i32,
    pub filter_hide_ms: i32,
    pub form_feedback_ms: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            loader_fade_ms: 500,
            cursor_trail_ms: 50,
            filter_show_ms: 100,
            filter_hide_ms: 300,
            form_feedback_ms: 2000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            hero: HeroConfig::default(),
            map: MapConfig::default(),
            timing: TimingConfig::default(),
            reveal_threshold: 0.2,
        }
    }
}

fn invalid<T>(msg: String) -> Result<T> {
    Err(Error::InvalidParam(msg))
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.hero.field.validate()?;
        self.hero.camera.validate()?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return invalid(format!(
                "reveal_threshold must be in [0, 1], got {}",
                self.reveal_threshold
            ));
        }
        let t = &self.timing;
        let delays = [
            t.loader_fade_ms,
            t.cursor_trail_ms,
            t.filter_show_ms,
            t.filter_hide_ms,
            t.form_feedback_ms,
        ];
        if delays.iter().any(|d| *d < 0) {
            return invalid("timing delays must not be negative".to_owned());
        }
        Ok(())
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return invalid(format!("threshold must be positive, got {}", self.threshold));
        }
        if !(self.spread.is_finite() && self.spread >= 0.0) {
            return invalid(format!("spread must not be negative, got {}", self.spread));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return invalid(format!("max_speed must not be negative, got {}", self.max_speed));
        }
        if !self.rotation_per_frame.is_finite() {
            return invalid("rotation_per_frame must be finite".to_owned());
        }
        self.bounds.validate()
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return invalid(format!("fov_deg must be in (0, 180), got {}", self.fov_deg));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return invalid(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            ));
        }
        Ok(())
    }
}
