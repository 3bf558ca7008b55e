#![forbid(unsafe_code)]

//! `folio-web` provides host-driven controllers for the portfolio surfaces.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer, key and
//!   viewport signals; controllers return transforms and capture commands.
//! - **Deterministic time**: anything time-dependent takes the current
//!   instant from the caller.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.

pub mod detail;
pub mod drag_machine;
pub mod folder;
pub mod pointer_capture;
pub mod ring;
pub mod scrapbook;
pub mod stack;

pub use detail::{DETAIL_LEVEL_STORAGE_KEY, DetailLevel, DetailPreference, UnknownDetailLevel};
pub use drag_machine::{
    CarouselCancelReason, CarouselDragEffect, CarouselDragMachine, CarouselDragMachineError,
    CarouselDragNoopReason, CarouselDragState, CarouselDragTransition, CarouselInputEvent,
    CarouselInputEventError, CarouselInputEventKind,
};
pub use folder::{FolderShelf, FolderVariant};
pub use pointer_capture::{
    CaptureCommand, CarouselPointerAdapter, PointerCaptureConfig, PointerDispatch,
    PointerIgnoredReason, PointerLifecyclePhase, PointerLogEntry, PointerLogOutcome,
};
pub use ring::{RingDispatch, RingIndicator};
pub use scrapbook::{
    CategoryLink, Motion, Scrapbook, ScrapbookConfig, ScrapbookError, ScrapbookLayout,
    SpringParams,
};
pub use stack::{Card, CardStack, Figure, FigureStack, StackEntry, WrappingStack};
