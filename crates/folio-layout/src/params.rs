#![forbid(unsafe_code)]

//! Carousel tuning parameters.
//!
//! Defaults reproduce the tuned look of the archive scrapbook. Every field has
//! a supported range; [`CarouselParams::validated`] clamps into it and
//! [`CarouselParams::validate`] reports the first value that falls outside.
//!
//! Parameters are serde-friendly: every section is `#[serde(default)]`, so a
//! partial JSON/TOML document only overrides what it names.

use std::f64::consts::PI;
use std::fmt;

use folio_core::item::DEFAULT_REFERENCE_ASPECT;
use serde::{Deserialize, Serialize};

/// Default gap between neighbouring items, in px.
pub const DEFAULT_SPACING: f64 = 40.0;

/// Default pointer travel (px) before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Default rounding bias applied when snapping a drag to an index.
pub const DEFAULT_SNAP_BIAS: f64 = 0.7;

/// Default number of items rendered on each side of the active item.
pub const DEFAULT_VISIBLE_RANGE: usize = 3;

/// Nominal rendered width (px) of an item at scale 1; used by balanced spacing.
pub const BASE_IMAGE_WIDTH: f64 = 460.0;

/// Floor applied to any spacing before it is used as a divisor.
pub const MIN_STEP_SPACING: f64 = 1.0;

/// How horizontal offsets between neighbours are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingPolicy {
    /// Items are `gap` px apart centre-to-centre, regardless of their size.
    Fixed,
    /// Items are `gap` px apart edge-to-edge, using each item's scaled width.
    #[default]
    BalancedByScale,
}

impl SpacingPolicy {
    /// Parse a policy name (`fixed`, `balanced`, `balanced_by_scale`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "balanced" | "balanced_by_scale" | "balanced-by-scale" => Some(Self::BalancedByScale),
            _ => None,
        }
    }
}

/// Spacing, scale and opacity falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub active_neighbor_gap: f64,
    pub inactive_gap: f64,
    pub spacing_policy: SpacingPolicy,
    pub active_scale: f64,
    pub inactive_scale: f64,
    pub inactive_scale_step: f64,
    pub inactive_scale_min: f64,
    pub inactive_opacity: f64,
    pub inactive_opacity_step: f64,
    pub inactive_opacity_min: f64,
    pub visible_range: usize,
    pub show_inactive_captions: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            active_neighbor_gap: DEFAULT_SPACING,
            inactive_gap: DEFAULT_SPACING,
            spacing_policy: SpacingPolicy::BalancedByScale,
            active_scale: 1.07,
            inactive_scale: 0.65,
            inactive_scale_step: 0.2,
            inactive_scale_min: 0.3,
            inactive_opacity: 0.8,
            inactive_opacity_step: 0.28,
            inactive_opacity_min: 0.07,
            visible_range: DEFAULT_VISIBLE_RANGE,
            show_inactive_captions: false,
        }
    }
}

/// Seeded "scattered" rotation of inactive items, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParams {
    /// Maximum absolute rotation of an inactive item.
    pub random_skew: f64,
    /// Blend between seeded noise (0) and a strict +/- alternation (1).
    pub alternation_strength: f64,
    /// Rotation of the active item.
    pub active_rotation: f64,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            random_skew: 0.0,
            alternation_strength: 0.0,
            active_rotation: 0.0,
        }
    }
}

/// Path shaping: arcs and waves, then a global skew/rotation (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathParams {
    pub rotate: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    pub vertical_offset: f64,
    pub curve: f64,
    pub wave_amplitude: f64,
    pub wave_frequency: f64,
    /// Radians.
    pub wave_phase: f64,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            rotate: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            vertical_offset: 0.0,
            curve: 0.0,
            wave_amplitude: 0.0,
            wave_frequency: 1.3,
            wave_phase: 0.0,
        }
    }
}

/// Blur falloff, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsParams {
    pub inactive_blur: f64,
    pub blur_step: f64,
    pub max_blur: f64,
}

impl Default for EffectsParams {
    fn default() -> Self {
        Self {
            inactive_blur: 20.0,
            blur_step: 10.0,
            max_blur: 30.0,
        }
    }
}

/// Aspect-ratio compensation so portrait and landscape items read as the
/// same visual weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpticsParams {
    pub normalize_inactive_by_aspect: bool,
    pub reference_aspect: f64,
    pub normalization_strength: f64,
}

impl Default for OpticsParams {
    fn default() -> Self {
        Self {
            normalize_inactive_by_aspect: true,
            reference_aspect: DEFAULT_REFERENCE_ASPECT,
            normalization_strength: 0.7,
        }
    }
}

/// Drag classification and snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragParams {
    pub threshold: f64,
    pub snap_bias: f64,
}

impl Default for DragParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DRAG_THRESHOLD,
            snap_bias: DEFAULT_SNAP_BIAS,
        }
    }
}

/// Complete carousel tuning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselParams {
    pub layout: LayoutParams,
    pub rotation: RotationParams,
    pub path: PathParams,
    pub effects: EffectsParams,
    pub optics: OpticsParams,
    pub drag: DragParams,
}

impl CarouselParams {
    /// Fixed-spacing variant of the defaults.
    #[must_use]
    pub fn fixed_spacing(spacing: f64) -> Self {
        let mut params = Self::default();
        params.layout.spacing_policy = SpacingPolicy::Fixed;
        params.layout.active_neighbor_gap = spacing;
        params.layout.inactive_gap = spacing;
        params
    }

    /// Pixel distance that corresponds to one index step when snapping.
    ///
    /// Never below [`MIN_STEP_SPACING`].
    #[must_use]
    pub fn step_spacing(&self) -> f64 {
        self.layout.active_neighbor_gap.max(MIN_STEP_SPACING)
    }

    /// Load defaults overridden by environment variables.
    ///
    /// Reads:
    /// - `FOLIO_DRAG_THRESHOLD`: drag threshold in px
    /// - `FOLIO_SNAP_BIAS`: snap rounding bias
    /// - `FOLIO_VISIBLE_RANGE`: items rendered on each side of the active one
    /// - `FOLIO_SPACING_POLICY`: `fixed` or `balanced`
    /// - `FOLIO_ACTIVE_NEIGHBOR_GAP`: first-step gap in px
    /// - `FOLIO_INACTIVE_GAP`: subsequent-step gap in px
    ///
    /// Unparsable values are ignored; results are clamped with [`validated`](Self::validated).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();

        if let Some(v) = env_f64(&get_env, "FOLIO_DRAG_THRESHOLD") {
            params.drag.threshold = v;
        }
        if let Some(v) = env_f64(&get_env, "FOLIO_SNAP_BIAS") {
            params.drag.snap_bias = v;
        }
        if let Some(v) = env_f64(&get_env, "FOLIO_ACTIVE_NEIGHBOR_GAP") {
            params.layout.active_neighbor_gap = v;
        }
        if let Some(v) = env_f64(&get_env, "FOLIO_INACTIVE_GAP") {
            params.layout.inactive_gap = v;
        }
        if let Some(raw) = get_env("FOLIO_VISIBLE_RANGE") {
            match raw.trim().parse::<usize>() {
                Ok(v) => params.layout.visible_range = v,
                Err(_) => tracing::debug!(
                    target: "folio.config",
                    key = "FOLIO_VISIBLE_RANGE",
                    value = %raw,
                    "ignoring unparsable config value"
                ),
            }
        }
        if let Some(raw) = get_env("FOLIO_SPACING_POLICY") {
            match SpacingPolicy::parse(&raw) {
                Some(policy) => params.layout.spacing_policy = policy,
                None => tracing::debug!(
                    target: "folio.config",
                    key = "FOLIO_SPACING_POLICY",
                    value = %raw,
                    "ignoring unknown spacing policy"
                ),
            }
        }

        params.validated()
    }

    /// Return a copy with every field clamped to its supported range.
    ///
    /// Non-finite values are replaced with the field's default.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let d = Self::default();

        let l = &mut self.layout;
        l.active_neighbor_gap = clamp_or(l.active_neighbor_gap, 0.0, 900.0, d.layout.active_neighbor_gap);
        l.inactive_gap = clamp_or(l.inactive_gap, 0.0, 900.0, d.layout.inactive_gap);
        l.active_scale = clamp_or(l.active_scale, 0.5, 1.5, d.layout.active_scale);
        l.inactive_scale = clamp_or(l.inactive_scale, 0.5, 1.0, d.layout.inactive_scale);
        l.inactive_scale_step = clamp_or(l.inactive_scale_step, 0.0, 0.4, d.layout.inactive_scale_step);
        l.inactive_scale_min = clamp_or(l.inactive_scale_min, 0.1, 1.0, d.layout.inactive_scale_min);
        l.inactive_opacity = clamp_or(l.inactive_opacity, 0.15, 1.0, d.layout.inactive_opacity);
        l.inactive_opacity_step =
            clamp_or(l.inactive_opacity_step, 0.0, 0.35, d.layout.inactive_opacity_step);
        l.inactive_opacity_min =
            clamp_or(l.inactive_opacity_min, 0.05, 1.0, d.layout.inactive_opacity_min);
        l.visible_range = l.visible_range.clamp(1, 6);

        let r = &mut self.rotation;
        r.random_skew = clamp_or(r.random_skew, 0.0, 24.0, d.rotation.random_skew);
        r.alternation_strength =
            clamp_or(r.alternation_strength, 0.0, 1.0, d.rotation.alternation_strength);
        r.active_rotation = clamp_or(r.active_rotation, -30.0, 30.0, d.rotation.active_rotation);

        let p = &mut self.path;
        p.rotate = clamp_or(p.rotate, -20.0, 20.0, d.path.rotate);
        p.skew_x = clamp_or(p.skew_x, -20.0, 20.0, d.path.skew_x);
        p.skew_y = clamp_or(p.skew_y, -20.0, 20.0, d.path.skew_y);
        p.vertical_offset = clamp_or(p.vertical_offset, -140.0, 140.0, d.path.vertical_offset);
        p.curve = clamp_or(p.curve, -240.0, 240.0, d.path.curve);
        p.wave_amplitude = clamp_or(p.wave_amplitude, 0.0, 280.0, d.path.wave_amplitude);
        p.wave_frequency = clamp_or(p.wave_frequency, 0.0, 4.0, d.path.wave_frequency);
        p.wave_phase = clamp_or(p.wave_phase, -PI, PI, d.path.wave_phase);

        let e = &mut self.effects;
        e.inactive_blur = clamp_or(e.inactive_blur, 0.0, 30.0, d.effects.inactive_blur);
        e.blur_step = clamp_or(e.blur_step, 0.0, 16.0, d.effects.blur_step);
        e.max_blur = clamp_or(e.max_blur, 0.0, 40.0, d.effects.max_blur);

        let o = &mut self.optics;
        o.reference_aspect = clamp_or(o.reference_aspect, 1.0, 2.0, d.optics.reference_aspect);
        o.normalization_strength =
            clamp_or(o.normalization_strength, 0.0, 1.5, d.optics.normalization_strength);

        let g = &mut self.drag;
        g.threshold = clamp_or(g.threshold, 0.0, 24.0, d.drag.threshold);
        g.snap_bias = clamp_or(g.snap_bias, 0.35, 0.95, d.drag.snap_bias);

        self
    }

    /// Check invariants the positioner relies on without modifying anything.
    ///
    /// Looser than [`validated`](Self::validated): only values that would make
    /// the math degenerate are rejected.
    pub fn validate(&self) -> Result<(), CarouselParamsError> {
        let finite = [
            ("layout.active_neighbor_gap", self.layout.active_neighbor_gap),
            ("layout.inactive_gap", self.layout.inactive_gap),
            ("layout.active_scale", self.layout.active_scale),
            ("layout.inactive_scale", self.layout.inactive_scale),
            ("layout.inactive_scale_step", self.layout.inactive_scale_step),
            ("layout.inactive_scale_min", self.layout.inactive_scale_min),
            ("layout.inactive_opacity", self.layout.inactive_opacity),
            ("layout.inactive_opacity_step", self.layout.inactive_opacity_step),
            ("layout.inactive_opacity_min", self.layout.inactive_opacity_min),
            ("rotation.random_skew", self.rotation.random_skew),
            ("rotation.alternation_strength", self.rotation.alternation_strength),
            ("rotation.active_rotation", self.rotation.active_rotation),
            ("path.rotate", self.path.rotate),
            ("path.skew_x", self.path.skew_x),
            ("path.skew_y", self.path.skew_y),
            ("path.vertical_offset", self.path.vertical_offset),
            ("path.curve", self.path.curve),
            ("path.wave_amplitude", self.path.wave_amplitude),
            ("path.wave_frequency", self.path.wave_frequency),
            ("path.wave_phase", self.path.wave_phase),
            ("effects.inactive_blur", self.effects.inactive_blur),
            ("effects.blur_step", self.effects.blur_step),
            ("effects.max_blur", self.effects.max_blur),
            ("optics.reference_aspect", self.optics.reference_aspect),
            ("optics.normalization_strength", self.optics.normalization_strength),
            ("drag.threshold", self.drag.threshold),
            ("drag.snap_bias", self.drag.snap_bias),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CarouselParamsError::NonFinite { field });
            }
        }

        if self.layout.active_neighbor_gap < 0.0 || self.layout.inactive_gap < 0.0 {
            return Err(CarouselParamsError::OutOfRange {
                field: "layout.gap",
                value: self.layout.active_neighbor_gap.min(self.layout.inactive_gap),
            });
        }
        if self.optics.reference_aspect <= 0.0 {
            return Err(CarouselParamsError::OutOfRange {
                field: "optics.reference_aspect",
                value: self.optics.reference_aspect,
            });
        }
        if self.drag.threshold < 0.0 {
            return Err(CarouselParamsError::OutOfRange {
                field: "drag.threshold",
                value: self.drag.threshold,
            });
        }
        if !(self.drag.snap_bias > 0.0 && self.drag.snap_bias < 1.0) {
            return Err(CarouselParamsError::OutOfRange {
                field: "drag.snap_bias",
                value: self.drag.snap_bias,
            });
        }
        Ok(())
    }
}

/// Parameter validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselParamsError {
    NonFinite { field: &'static str },
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for CarouselParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "carousel parameter {field} must be finite"),
            Self::OutOfRange { field, value } => {
                write!(f, "carousel parameter {field} out of range (got {value})")
            }
        }
    }
}

impl std::error::Error for CarouselParamsError {}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

fn env_f64<F>(get_env: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = get_env(key)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::debug!(
                target: "folio.config",
                key = key,
                value = %raw,
                "ignoring unparsable config value"
            );
            None
        }
    }
}
