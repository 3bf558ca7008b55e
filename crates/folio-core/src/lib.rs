#![forbid(unsafe_code)]

//! Core: items, catalog data, geometry, input vocabulary, and platform seams.
//!
//! # Role in folio
//! `folio-core` is the data layer. It owns the immutable item records that
//! carousels arrange, the archive catalog that supplies them, the small 2D
//! geometry used by path shaping, and the platform capability traits that keep
//! DOM/browser state out of the positioning logic.
//!
//! # Primary responsibilities
//! - **Item / AspectRatio**: stable identity, caption, optional `w/h` ratio.
//! - **Catalog**: ordered archive categories with wrapping neighbours.
//! - **Seed**: deterministic `id -> [0, 1)` hash used for per-item rotation.
//! - **Platform**: pointer capture, viewport size, persistent key-value store.
//!
//! # How it fits in the system
//! `folio-layout` consumes items and geometry to compute per-item transforms.
//! `folio-web` drives those computations from host pointer/keyboard events and
//! talks to the host exclusively through [`platform::Platform`].

pub mod catalog;
pub mod event;
pub mod geometry;
pub mod item;
pub mod logging;
pub mod platform;
pub mod seed;

pub use catalog::{Catalog, Category, CategorySlug};
pub use event::{KeyCode, PointerButton};
pub use geometry::{PathTransform, Point, Size};
pub use item::{AspectRatio, Item, ItemId};
pub use platform::{
    KeyValueStore, MemoryPlatform, Platform, PlatformError, PointerCapture, Viewport,
};
