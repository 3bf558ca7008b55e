#![forbid(unsafe_code)]

//! folio public facade crate.
//!
//! Re-exports the carousel positioner, the host-driven controllers and the
//! data they arrange, plus a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::catalog::{Catalog, Category, CategorySlug, UnknownCategory};
pub use folio_core::event::{KeyCode, PointerButton};
pub use folio_core::geometry::{Point, Size};
pub use folio_core::item::{AspectRatio, Item, ItemId, ParseAspectRatioError};
pub use folio_core::platform::{
    KeyValueStore, MemoryPlatform, Platform, PlatformError, PointerCapture, Viewport,
};

// --- Layout re-exports -----------------------------------------------------

pub use folio_layout::{
    CarouselParams, CarouselParamsError, CarouselPositioner, DragOutcome, DragSession,
    ItemTransform, NavDirection, SpacingPolicy,
};

// --- Controller re-exports -------------------------------------------------

pub use folio_web::{
    CaptureCommand, CardStack, CarouselDragEffect, CarouselDragMachine, CarouselDragMachineError,
    CarouselInputEventError, CarouselPointerAdapter, DetailLevel, DetailPreference, FigureStack,
    FolderShelf, FolderVariant, PointerCaptureConfig, PointerDispatch, RingIndicator, Scrapbook,
    ScrapbookConfig, ScrapbookError, ScrapbookLayout, UnknownDetailLevel,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Carousel parameters failed validation.
    Params(CarouselParamsError),
    /// Drag machine configuration or event was rejected.
    Drag(CarouselDragMachineError),
    /// Malformed pointer event.
    Event(CarouselInputEventError),
    /// Host capability failure (storage).
    Platform(PlatformError),
    UnknownCategory(UnknownCategory),
    Scrapbook(ScrapbookError),
    UnknownDetailLevel(UnknownDetailLevel),
    AspectRatio(ParseAspectRatioError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params(err) => write!(f, "{err}"),
            Self::Drag(err) => write!(f, "{err}"),
            Self::Event(err) => write!(f, "{err}"),
            Self::Platform(err) => write!(f, "{err}"),
            Self::UnknownCategory(err) => write!(f, "{err}"),
            Self::Scrapbook(err) => write!(f, "{err}"),
            Self::UnknownDetailLevel(err) => write!(f, "{err}"),
            Self::AspectRatio(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Params(err) => Some(err),
            Self::Drag(err) => Some(err),
            Self::Event(err) => Some(err),
            Self::Platform(err) => Some(err),
            Self::UnknownCategory(err) => Some(err),
            Self::Scrapbook(err) => Some(err),
            Self::UnknownDetailLevel(err) => Some(err),
            Self::AspectRatio(err) => Some(err),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Self {
                    Self::$variant(err)
                }
            }
        )*
    };
}

impl_from!(
    Params(CarouselParamsError),
    Drag(CarouselDragMachineError),
    Event(CarouselInputEventError),
    Platform(PlatformError),
    UnknownCategory(UnknownCategory),
    Scrapbook(ScrapbookError),
    UnknownDetailLevel(UnknownDetailLevel),
    AspectRatio(ParseAspectRatioError),
);

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CaptureCommand, CarouselParams, CarouselPositioner, Catalog, Error, Item, ItemTransform,
        KeyCode, MemoryPlatform, NavDirection, PointerButton, Result, RingIndicator, Scrapbook,
        ScrapbookConfig, Size,
    };
    pub use crate::{core, layout, web};
}

pub use folio_core as core;
pub use folio_layout as layout;
pub use folio_web as web;
