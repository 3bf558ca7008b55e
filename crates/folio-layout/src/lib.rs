#![forbid(unsafe_code)]

//! Carousel layout: per-item transforms, drag snapping, and stack order.
//!
//! Everything here is pure arithmetic over [`folio_core::Item`] lists and
//! [`CarouselParams`]. Event handling and host effects live in `folio-web`.

pub mod drag;
pub mod params;
pub mod positioner;
pub mod snap;
pub mod stack;

pub use drag::{DragOutcome, DragSession};
pub use params::{
    BASE_IMAGE_WIDTH, CarouselParams, CarouselParamsError, DEFAULT_DRAG_THRESHOLD,
    DEFAULT_SNAP_BIAS, DEFAULT_SPACING, DEFAULT_VISIBLE_RANGE, DragParams, EffectsParams,
    LayoutParams, MIN_STEP_SPACING, OpticsParams, PathParams, RotationParams, SpacingPolicy,
};
pub use positioner::{ACTIVE_Z_INDEX, CarouselPositioner, ItemTransform};
pub use snap::{NavDirection, clamp_index, navigate, settle_index, snap_shift, wrapping_navigate};
pub use stack::{stack_order, stack_position};
