#![forbid(unsafe_code)]

//! Platform capabilities required by carousel controllers.
//!
//! Controllers never touch the DOM directly. Everything ambient (pointer
//! capture, window size, `localStorage`) goes through these traits so that
//! positioning and navigation stay pure and testable off-browser.
//!
//! [`MemoryPlatform`] implements every capability in memory. It is the
//! default for non-browser hosts and for tests.

use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::Size;

/// Pointer capture control (DOM `setPointerCapture` / `releasePointerCapture`).
pub trait PointerCapture {
    /// Route all further events for `pointer_id` to the carousel.
    fn set_pointer_capture(&mut self, pointer_id: u32);

    /// Stop routing events for `pointer_id`.
    fn release_pointer_capture(&mut self, pointer_id: u32);
}

/// Viewport size query.
pub trait Viewport {
    /// Current viewport size in logical pixels.
    fn viewport_size(&self) -> Size;
}

/// Persistent string key-value storage (DOM `localStorage`).
pub trait KeyValueStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError>;
}

/// Every capability a carousel host provides.
pub trait Platform: PointerCapture + Viewport + KeyValueStore {}

impl<T: PointerCapture + Viewport + KeyValueStore + ?Sized> Platform for T {}

/// Failures reported by platform capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Storage is disabled (private browsing, sandboxed iframe, ...).
    StorageUnavailable,
    /// Storage refused the write.
    QuotaExceeded { key: String },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "persistent storage is unavailable"),
            Self::QuotaExceeded { key } => {
                write!(f, "storage quota exceeded while writing {key:?}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

/// In-memory platform: fixed viewport, map-backed storage, recorded captures.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    viewport: Size,
    storage: BTreeMap<String, String>,
    storage_enabled: bool,
    captured: Vec<u32>,
}

impl MemoryPlatform {
    /// Create a platform with the given viewport and working storage.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            storage: BTreeMap::new(),
            storage_enabled: true,
            captured: Vec::new(),
        }
    }

    /// Simulate disabled storage: reads return nothing, writes fail.
    #[must_use]
    pub fn without_storage(mut self) -> Self {
        self.storage_enabled = false;
        self
    }

    /// Change the reported viewport size.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Pointer ids currently captured, in acquisition order.
    #[must_use]
    pub fn captured_pointers(&self) -> &[u32] {
        &self.captured
    }
}

impl PointerCapture for MemoryPlatform {
    fn set_pointer_capture(&mut self, pointer_id: u32) {
        if !self.captured.contains(&pointer_id) {
            self.captured.push(pointer_id);
        }
    }

    fn release_pointer_capture(&mut self, pointer_id: u32) {
        self.captured.retain(|id| *id != pointer_id);
    }
}

impl Viewport for MemoryPlatform {
    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

impl KeyValueStore for MemoryPlatform {
    fn get(&self, key: &str) -> Option<String> {
        if !self.storage_enabled {
            return None;
        }
        self.storage.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError> {
        if !self.storage_enabled {
            return Err(PlatformError::StorageUnavailable);
        }
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_platform<P: Platform>(_: &P) {}

    #[test]
    fn memory_platform_is_a_platform() {
        let platform = MemoryPlatform::new(Size::new(1280.0, 800.0));
        assert_platform(&platform);
        assert_eq!(platform.viewport_size(), Size::new(1280.0, 800.0));
    }

    #[test]
    fn capture_is_idempotent_and_releasable() {
        let mut platform = MemoryPlatform::default();
        platform.set_pointer_capture(4);
        platform.set_pointer_capture(4);
        platform.set_pointer_capture(9);
        assert_eq!(platform.captured_pointers(), &[4, 9]);
        platform.release_pointer_capture(4);
        assert_eq!(platform.captured_pointers(), &[9]);
    }

    #[test]
    fn storage_round_trip() {
        let mut platform = MemoryPlatform::new(Size::new(800.0, 600.0));
        assert_eq!(platform.get("detail-level"), None);
        platform
            .set("detail-level", "brief")
            .expect("memory storage accepts writes");
        assert_eq!(platform.get("detail-level").as_deref(), Some("brief"));
    }

    #[test]
    fn disabled_storage_fails_writes() {
        let mut platform = MemoryPlatform::new(Size::new(800.0, 600.0)).without_storage();
        assert_eq!(
            platform.set("detail-level", "brief"),
            Err(PlatformError::StorageUnavailable)
        );
        assert_eq!(platform.get("detail-level"), None);
    }
}
