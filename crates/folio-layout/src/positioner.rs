#![forbid(unsafe_code)]

//! Carousel positioner: per-item transforms from distance to the active item.
//!
//! Every output is a pure function of `(params, items, index, active, drag
//! delta)`. Nothing is cached between calls, so the positioner can run on
//! every pointer-move and animation frame; a full frame is O(items · range).
//!
//! # Pipeline (per item)
//!
//! 1. `distance = index - active`
//! 2. scale / opacity / blur fall off with `|distance|` beyond the first
//!    neighbour, each floored or capped
//! 3. x from the spacing policy, plus the live drag delta
//! 4. y from the path shape (linear + quadratic curve + sine wave)
//! 5. shear + rotate `(x, y)` by the global path transform
//! 6. rotation from the item's seeded identity
//!
//! # Invariants
//!
//! 1. The active item has distance 0, rotation `active_rotation`, scale
//!    `active_scale`, opacity 1 and blur 0.
//! 2. Rotation of an inactive item depends only on its identity and the
//!    rotation params.
//! 3. `visible == |distance| <= visible_range`; a single item is always
//!    active and therefore always visible.

use folio_core::geometry::{PathTransform, Point};
use folio_core::item::Item;
use folio_core::seed;
use serde::{Deserialize, Serialize};

use crate::params::{
    BASE_IMAGE_WIDTH, CarouselParams, EffectsParams, LayoutParams, OpticsParams, PathParams,
    RotationParams, SpacingPolicy,
};
use crate::snap::clamp_index;

/// Z-order of the active item; inactive items sit below at `5 - |distance|`.
pub const ACTIVE_Z_INDEX: i32 = 10;

/// Computed visual state of one item for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemTransform {
    /// Signed `index - active`.
    pub distance: i64,
    /// Offset from the stage centre, in px.
    pub offset: Point,
    /// Degrees, clockwise.
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Gaussian blur radius, in px.
    pub blur: f64,
    pub z_index: i32,
    pub visible: bool,
    pub caption_visible: bool,
}

impl ItemTransform {
    /// Whether this is the focused item.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.distance == 0
    }
}

/// Stateless layout engine over a borrowed item list.
#[derive(Debug, Clone, Copy)]
pub struct CarouselPositioner<'a> {
    params: &'a CarouselParams,
    items: &'a [Item],
    path: PathTransform,
}

impl<'a> CarouselPositioner<'a> {
    /// Bind parameters and items.
    #[must_use]
    pub fn new(params: &'a CarouselParams, items: &'a [Item]) -> Self {
        let path = PathTransform::from_degrees(params.path.rotate, params.path.skew_x, params.path.skew_y);
        Self {
            params,
            items,
            path,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bound parameters.
    #[must_use]
    pub const fn params(&self) -> &'a CarouselParams {
        self.params
    }

    /// Transform of the item at `index` when `active` is focused.
    ///
    /// `active` is clamped into range. `drag_delta` is the committed live
    /// drag delta (pass `0.0` when not dragging); non-finite values count as
    /// zero. Returns `None` when `index` is out of range.
    #[must_use]
    pub fn item_transform(&self, index: usize, active: usize, drag_delta: f64) -> Option<ItemTransform> {
        let item = self.items.get(index)?;
        let active = clamp_index(active as i64, self.items.len());
        let distance = index as i64 - active as i64;
        let steps = distance.unsigned_abs();
        let is_active = distance == 0;

        let layout = &self.params.layout;
        let drag_delta = if drag_delta.is_finite() { drag_delta } else { 0.0 };

        let base_x = match layout.spacing_policy {
            SpacingPolicy::Fixed => {
                distance_offset(distance, layout.active_neighbor_gap, layout.inactive_gap)
            }
            SpacingPolicy::BalancedByScale => self.balanced_offset(distance, active),
        } + drag_delta;
        let base_y = path_y(distance, &self.params.path);
        let offset = self.path.apply(Point::new(base_x, base_y));

        let visible = steps <= layout.visible_range as u64;

        Some(ItemTransform {
            distance,
            offset,
            rotation: if is_active {
                self.params.rotation.active_rotation
            } else {
                item_rotation(item, &self.params.rotation)
            },
            scale: self.scale_at(index, active),
            opacity: if is_active { 1.0 } else { inactive_opacity(steps, layout) },
            blur: if is_active { 0.0 } else { inactive_blur(steps, &self.params.effects) },
            z_index: if is_active {
                ACTIVE_Z_INDEX
            } else {
                5_i32.saturating_sub(i32::try_from(steps).unwrap_or(i32::MAX))
            },
            visible,
            caption_visible: visible && (is_active || layout.show_inactive_captions),
        })
    }

    /// Transforms for every item, in item order.
    #[must_use]
    pub fn frame(&self, active: usize, drag_delta: f64) -> Vec<ItemTransform> {
        (0..self.items.len())
            .filter_map(|index| self.item_transform(index, active, drag_delta))
            .collect()
    }

    /// Scale of the item at `index` when `active` is focused.
    ///
    /// Out-of-range indices report the active scale.
    #[must_use]
    pub fn scale_at(&self, index: usize, active: usize) -> f64 {
        let layout = &self.params.layout;
        let Some(item) = self.items.get(index) else {
            return layout.active_scale;
        };
        if index == active {
            return layout.active_scale;
        }
        let steps = (index as i64 - active as i64).unsigned_abs();
        inactive_scale(steps, layout) * optical_compensation(item.aspect_value(), &self.params.optics)
    }

    /// Centre-to-centre offset where each step clears both neighbours' scaled
    /// widths plus the configured gap.
    fn balanced_offset(&self, distance: i64, active: usize) -> f64 {
        if distance == 0 {
            return 0.0;
        }
        let layout = &self.params.layout;
        let direction = distance.signum();
        let mut offset = 0.0;
        let mut previous = active;
        for step in 1..=distance.unsigned_abs() {
            let current = (active as i64 + direction * step as i64) as usize;
            let gap = if step == 1 {
                layout.active_neighbor_gap
            } else {
                layout.inactive_gap
            };
            let previous_width = BASE_IMAGE_WIDTH * self.scale_at(previous, active);
            let current_width = BASE_IMAGE_WIDTH * self.scale_at(current, active);
            offset += (previous_width + current_width) / 2.0 + gap;
            previous = current;
        }
        direction as f64 * offset
    }
}

/// Fixed-policy offset: first step uses `active_neighbor_gap`, later steps
/// `inactive_gap`.
#[must_use]
pub fn distance_offset(distance: i64, active_neighbor_gap: f64, inactive_gap: f64) -> f64 {
    if distance == 0 {
        return 0.0;
    }
    let tail_steps = distance.unsigned_abs().saturating_sub(1) as f64;
    distance.signum() as f64 * (active_neighbor_gap + tail_steps * inactive_gap)
}

/// Vertical path offset before the global transform.
#[must_use]
pub fn path_y(distance: i64, path: &PathParams) -> f64 {
    let d = distance as f64;
    d * path.vertical_offset
        + d.abs().powi(2) * path.curve * 0.1
        + (d * path.wave_frequency + path.wave_phase).sin() * path.wave_amplitude
}

/// Rotation (degrees) of an inactive item.
///
/// Seeded noise in `[-1, 1)` blended with a `+1` (even id) / `-1` (odd id)
/// alternation, scaled by `random_skew`.
#[must_use]
pub fn item_rotation(item: &Item, rotation: &RotationParams) -> f64 {
    let random_unit = seed::item_unit(item.id) * 2.0 - 1.0;
    let alternating_unit = if item.id.is_even() { 1.0 } else { -1.0 };
    let strength = rotation.alternation_strength;
    let blended = random_unit * (1.0 - strength) + alternating_unit * strength;
    blended * rotation.random_skew
}

/// Base inactive scale after distance falloff (before optical compensation).
#[must_use]
pub fn inactive_scale(steps: u64, layout: &LayoutParams) -> f64 {
    let extra = steps.saturating_sub(1) as f64;
    (layout.inactive_scale - extra * layout.inactive_scale_step).max(layout.inactive_scale_min)
}

/// Multiplier that equalises apparent area across aspect ratios.
///
/// `1 + (sqrt(aspect / reference) - 1) * strength`, or `1` when disabled.
#[must_use]
pub fn optical_compensation(aspect: f64, optics: &OpticsParams) -> f64 {
    if !optics.normalize_inactive_by_aspect {
        return 1.0;
    }
    let reference = if optics.reference_aspect > 0.0 {
        optics.reference_aspect
    } else {
        folio_core::item::DEFAULT_REFERENCE_ASPECT
    };
    let area_base = (aspect / reference).sqrt();
    1.0 + (area_base - 1.0) * optics.normalization_strength
}

/// Opacity of an inactive item `steps` away from the active one.
#[must_use]
pub fn inactive_opacity(steps: u64, layout: &LayoutParams) -> f64 {
    let extra = steps.saturating_sub(1) as f64;
    (layout.inactive_opacity - extra * layout.inactive_opacity_step).max(layout.inactive_opacity_min)
}

/// Blur radius of an inactive item `steps` away from the active one.
#[must_use]
pub fn inactive_blur(steps: u64, effects: &EffectsParams) -> f64 {
    let extra = steps.saturating_sub(1) as f64;
    (effects.inactive_blur + extra * effects.blur_step).min(effects.max_blur)
}
