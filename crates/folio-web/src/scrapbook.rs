#![forbid(unsafe_code)]

//! Scrapbook: the per-category image stage.
//!
//! Owns the active index and a [`CarouselPointerAdapter`]. Navigation is
//! bounded (no wrap). While a drag is committed the live delta flows into the
//! positioner and the projected index drives the ring; pointer-up settles the
//! active index from the last move delta.
//!
//! Narrow viewports switch to a vertical stack; the host renders every item
//! there and ignores the stage transforms.

use std::fmt;

use folio_core::catalog::{Catalog, Category, CategorySlug, UnknownCategory};
use folio_core::event::{KeyCode, PointerButton};
use folio_core::geometry::Size;
use folio_core::item::Item;
use folio_core::platform::Viewport;
use folio_layout::params::{CarouselParams, CarouselParamsError};
use folio_layout::positioner::{CarouselPositioner, ItemTransform};
use folio_layout::snap::{NavDirection, clamp_index, navigate};
use serde::{Deserialize, Serialize};

use crate::drag_machine::{CarouselDragEffect, CarouselDragMachineError, CarouselDragState};
use crate::pointer_capture::{CarouselPointerAdapter, PointerCaptureConfig, PointerDispatch};
use crate::ring;

/// Viewports at most this wide use the mobile stack, in px.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Vertical gap between stacked images on mobile, in px.
pub const DEFAULT_MOBILE_GAP: f64 = 16.0;

/// Supported mobile gap range, in px.
pub const MOBILE_GAP_RANGE: (f64, f64) = (4.0, 40.0);

pub const PREV_ZONE_LABEL: &str = "Previous image";
pub const NEXT_ZONE_LABEL: &str = "Next image";

/// Spring used for settled transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Perceived duration, in seconds.
    pub visual_duration: f64,
    pub bounce: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            visual_duration: 0.25,
            bounce: 0.25,
        }
    }
}

/// Scrapbook configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapbookConfig {
    pub mobile_breakpoint: f64,
    pub mobile_gap: f64,
    /// Host reported `prefers-reduced-motion: reduce`.
    pub reduced_motion: bool,
    pub spring: SpringParams,
    pub pointer: PointerCaptureConfig,
}

impl Default for ScrapbookConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            mobile_gap: DEFAULT_MOBILE_GAP,
            reduced_motion: false,
            spring: SpringParams::default(),
            pointer: PointerCaptureConfig::default(),
        }
    }
}

impl ScrapbookConfig {
    /// Load defaults overridden by environment variables.
    ///
    /// Reads:
    /// - `FOLIO_MOBILE_GAP`: mobile stack gap in px
    /// - `FOLIO_REDUCED_MOTION`: `1`/`true` or `0`/`false`
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
        let mut config = Self::default();
        if let Some(raw) = get_env("FOLIO_MOBILE_GAP") {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => config.mobile_gap = v,
                _ => ignore("FOLIO_MOBILE_GAP", &raw),
            }
        }
        if let Some(raw) = get_env("FOLIO_REDUCED_MOTION") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.reduced_motion = true,
                "0" | "false" | "no" => config.reduced_motion = false,
                _ => ignore("FOLIO_REDUCED_MOTION", &raw),
            }
        }
        config.validated()
    }

    /// Clamp the mobile gap into [`MOBILE_GAP_RANGE`]; non-finite sizes fall
    /// back to defaults.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let (min, max) = MOBILE_GAP_RANGE;
        self.mobile_gap = if self.mobile_gap.is_finite() {
            self.mobile_gap.clamp(min, max)
        } else {
            DEFAULT_MOBILE_GAP
        };
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            self.mobile_breakpoint = DEFAULT_MOBILE_BREAKPOINT;
        }
        self
    }
}

fn ignore(key: &str, raw: &str) {
    tracing::debug!(
        target: "folio.config",
        key = key,
        value = %raw,
        "ignoring unparsable config value"
    );
}

/// How the host should animate toward the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Jump; used while dragging, before mount and under reduced motion.
    Instant,
    Spring(SpringParams),
}

/// What the host renders for the current viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScrapbookLayout {
    Stage {
        transforms: Vec<ItemTransform>,
        motion: Motion,
    },
    MobileStack {
        gap: f64,
    },
}

/// Link to a neighbouring archive category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    pub slug: CategorySlug,
    pub name: String,
    pub href: String,
}

impl CategoryLink {
    #[must_use]
    pub fn to(category: &Category) -> Self {
        Self {
            slug: category.slug,
            name: category.name.clone(),
            href: format!("/archive/{}", category.slug),
        }
    }
}

/// Scrapbook construction failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapbookError {
    UnknownCategory(UnknownCategory),
    InvalidParams(CarouselParamsError),
    InvalidDragConfig(CarouselDragMachineError),
}

impl fmt::Display for ScrapbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(err) => write!(f, "cannot open scrapbook: {err}"),
            Self::InvalidParams(err) => write!(f, "invalid scrapbook parameters: {err}"),
            Self::InvalidDragConfig(err) => write!(f, "invalid scrapbook drag config: {err}"),
        }
    }
}

impl std::error::Error for ScrapbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownCategory(err) => Some(err),
            Self::InvalidParams(err) => Some(err),
            Self::InvalidDragConfig(err) => Some(err),
        }
    }
}

impl From<UnknownCategory> for ScrapbookError {
    fn from(err: UnknownCategory) -> Self {
        Self::UnknownCategory(err)
    }
}

impl From<CarouselParamsError> for ScrapbookError {
    fn from(err: CarouselParamsError) -> Self {
        Self::InvalidParams(err)
    }
}

impl From<CarouselDragMachineError> for ScrapbookError {
    fn from(err: CarouselDragMachineError) -> Self {
        Self::InvalidDragConfig(err)
    }
}

/// Scrapbook controller for one category.
#[derive(Debug, Clone)]
pub struct Scrapbook {
    slug: CategorySlug,
    name: String,
    items: Vec<Item>,
    params: CarouselParams,
    config: ScrapbookConfig,
    adapter: CarouselPointerAdapter,
    active: usize,
    mounted: bool,
    /// The last press committed to a drag; its trailing click is swallowed.
    dragged: bool,
    neighbours: Option<(CategoryLink, CategoryLink)>,
}

impl Scrapbook {
    /// Build a scrapbook over `category` without neighbour links.
    pub fn new(
        category: &Category,
        params: CarouselParams,
        config: ScrapbookConfig,
    ) -> Result<Self, ScrapbookError> {
        params.validate()?;
        let config = config.validated();
        let adapter = CarouselPointerAdapter::new(&params, config.pointer)?;
        tracing::debug!(
            target: "folio.scrapbook",
            category = %category.slug,
            items = category.len(),
            "scrapbook opened"
        );
        Ok(Self {
            slug: category.slug,
            name: category.name.clone(),
            items: category.items.clone(),
            params,
            config,
            adapter,
            active: 0,
            mounted: false,
            dragged: false,
            neighbours: None,
        })
    }

    /// Open the category whose slug is `slug`, with previous/next links.
    pub fn open(
        catalog: &Catalog,
        slug: &str,
        params: CarouselParams,
        config: ScrapbookConfig,
    ) -> Result<Self, ScrapbookError> {
        let category = catalog.by_slug(slug)?;
        let mut scrapbook = Self::new(category, params, config)?;
        scrapbook.neighbours = catalog
            .neighbours(category.slug)
            .map(|(prev, next)| (CategoryLink::to(prev), CategoryLink::to(next)));
        Ok(scrapbook)
    }

    #[must_use]
    pub const fn slug(&self) -> CategorySlug {
        self.slug
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn params(&self) -> &CarouselParams {
        &self.params
    }

    #[must_use]
    pub const fn config(&self) -> &ScrapbookConfig {
        &self.config
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&Item> {
        self.items.get(self.active)
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.active > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.active + 1 < self.items.len()
    }

    /// Step back; returns whether the index moved.
    pub fn go_back(&mut self) -> bool {
        self.step(NavDirection::Prev)
    }

    /// Step forward; returns whether the index moved.
    pub fn go_forward(&mut self) -> bool {
        self.step(NavDirection::Next)
    }

    /// Jump to `index` (clamped), e.g. from the ring indicator.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.set_active(clamp_index(i64::try_from(index).unwrap_or(i64::MAX), self.items.len()));
        self.active
    }

    /// Click on a previous/next navigation zone.
    ///
    /// The click that trails a committed drag is ignored once.
    pub fn nav_zone_click(&mut self, direction: NavDirection) -> bool {
        if std::mem::take(&mut self.dragged) {
            tracing::trace!(target: "folio.scrapbook", "click after drag suppressed");
            return false;
        }
        self.step(direction)
    }

    /// Stage keys: ArrowLeft/ArrowRight step, Home/End jump.
    ///
    /// Returns whether the key was handled (its default action suppressed).
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::ArrowLeft => {
                self.go_back();
            }
            KeyCode::ArrowRight => {
                self.go_forward();
            }
            KeyCode::Home => {
                self.go_to(0);
            }
            KeyCode::End => {
                self.go_to(self.items.len().saturating_sub(1));
            }
            KeyCode::ArrowUp | KeyCode::ArrowDown | KeyCode::Escape => return false,
        }
        true
    }

    pub fn pointer_down(&mut self, pointer_id: u32, button: PointerButton, x: f64) -> PointerDispatch {
        let count = self.items.len();
        let dispatch = self.adapter.pointer_down(pointer_id, button, x, self.active, count);
        if dispatch.transition.is_some() {
            self.dragged = false;
        }
        dispatch
    }

    pub fn pointer_move(&mut self, pointer_id: u32, x: f64) -> PointerDispatch {
        let dispatch = self.adapter.pointer_move(pointer_id, x);
        if self.is_dragging() {
            self.dragged = true;
        }
        dispatch
    }

    pub fn capture_acquired(&mut self, pointer_id: u32) -> PointerDispatch {
        self.adapter.capture_acquired(pointer_id)
    }

    /// Pointer-up; a settled drag moves the active index.
    pub fn pointer_up(&mut self, pointer_id: u32, button: PointerButton) -> PointerDispatch {
        let dispatch = self.adapter.pointer_up(pointer_id, button);
        if let Some(CarouselDragEffect::Settled { index, shift, .. }) = dispatch.effect() {
            tracing::debug!(target: "folio.scrapbook", index, shift, "drag settled");
            self.set_active(index);
        }
        dispatch
    }

    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> PointerDispatch {
        self.adapter.pointer_cancel(pointer_id)
    }

    pub fn blur(&mut self) -> PointerDispatch {
        self.adapter.blur()
    }

    pub fn visibility_hidden(&mut self) -> PointerDispatch {
        self.adapter.visibility_hidden()
    }

    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> PointerDispatch {
        self.adapter.lost_pointer_capture(pointer_id)
    }

    /// Pointer owning the current gesture.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.adapter.active_pointer_id()
    }

    #[must_use]
    pub const fn drag_state(&self) -> CarouselDragState {
        self.adapter.machine_state()
    }

    /// Whether a drag has committed.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.adapter.machine_state().is_dragging()
    }

    /// Live delta applied to the stage (zero unless dragging).
    #[must_use]
    pub const fn drag_delta(&self) -> f64 {
        self.adapter.machine().live_delta()
    }

    /// Index shown by the ring: the drag projection while dragging, else the
    /// active index.
    #[must_use]
    pub fn projected_index(&self) -> usize {
        if self.is_dragging() {
            self.adapter.machine().projected_index().unwrap_or(self.active)
        } else {
            self.active
        }
    }

    /// Mark the stage as mounted; transitions animate from here on.
    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        if self.config.reduced_motion || !self.mounted || self.is_dragging() {
            Motion::Instant
        } else {
            Motion::Spring(self.config.spring)
        }
    }

    /// Transforms for every item at the current index and drag delta.
    #[must_use]
    pub fn frame(&self) -> Vec<ItemTransform> {
        CarouselPositioner::new(&self.params, &self.items).frame(self.active, self.drag_delta())
    }

    #[must_use]
    pub fn is_mobile(&self, viewport: Size) -> bool {
        viewport.width <= self.config.mobile_breakpoint
    }

    /// Layout for a viewport of `viewport`.
    #[must_use]
    pub fn layout(&self, viewport: Size) -> ScrapbookLayout {
        if self.is_mobile(viewport) {
            ScrapbookLayout::MobileStack {
                gap: self.config.mobile_gap,
            }
        } else {
            ScrapbookLayout::Stage {
                transforms: self.frame(),
                motion: self.motion(),
            }
        }
    }

    #[must_use]
    pub fn layout_for(&self, viewport: &dyn Viewport) -> ScrapbookLayout {
        self.layout(viewport.viewport_size())
    }

    /// `"Image N of M: caption"` for the projected item.
    #[must_use]
    pub fn value_text(&self) -> String {
        let index = self.projected_index();
        ring::value_text(
            index,
            self.items.len(),
            self.items.get(index).map(|item| item.caption.as_str()),
        )
    }

    #[must_use]
    pub fn prev_category(&self) -> Option<&CategoryLink> {
        self.neighbours.as_ref().map(|(prev, _)| prev)
    }

    #[must_use]
    pub fn next_category(&self) -> Option<&CategoryLink> {
        self.neighbours.as_ref().map(|(_, next)| next)
    }

    fn step(&mut self, direction: NavDirection) -> bool {
        let next = navigate(direction, self.active, self.items.len());
        if next == self.active {
            return false;
        }
        self.set_active(next);
        true
    }

    fn set_active(&mut self, index: usize) {
        if index != self.active {
            tracing::debug!(
                target: "folio.scrapbook",
                category = %self.slug,
                from = self.active,
                to = index,
                "active image changed"
            );
        }
        self.active = index;
    }
}
