#![forbid(unsafe_code)]

//! Archive folder shelf: one folder per category, at most one open.
//!
//! Closing a folder briefly suppresses its hover state so the pointer still
//! resting on it does not immediately re-lift it. Time is supplied by the
//! host, which keeps the controller deterministic under test.

use std::time::Duration;

use folio_core::catalog::{Catalog, Category, CategorySlug};
use folio_core::event::KeyCode;
use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Hover suppression after closing a folder by clicking it.
pub const CLICK_CLOSE_COOLDOWN: Duration = Duration::from_millis(800);

/// Hover suppression after closing a folder with Escape.
pub const ESCAPE_CLOSE_COOLDOWN: Duration = Duration::from_millis(300);

/// Duration of folder front/tag animations.
pub const FOLDER_TRANSITION: Duration = Duration::from_millis(180);

/// Visual state of one folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderVariant {
    Closed,
    Hover,
    Open,
}

impl FolderVariant {
    /// Horizontal skew of the folder front, in degrees.
    #[must_use]
    pub const fn front_skew(self, reduced_motion: bool) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Hover | Self::Open if !reduced_motion => -4.0,
            Self::Hover | Self::Open => 0.0,
        }
    }

    /// Horizontal skew of the folder tag, in degrees.
    #[must_use]
    pub const fn tag_skew(self, reduced_motion: bool) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Hover | Self::Open if !reduced_motion => -5.0,
            Self::Hover | Self::Open => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cooldown {
    slug: CategorySlug,
    until: Instant,
}

/// Folder shelf controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderShelf {
    open: Option<CategorySlug>,
    hovered: Option<CategorySlug>,
    recently_closed: Option<Cooldown>,
}

impl FolderShelf {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open folder.
    #[must_use]
    pub const fn open_folder(&self) -> Option<CategorySlug> {
        self.open
    }

    /// Category whose panel is shown.
    #[must_use]
    pub fn open_category<'a>(&self, catalog: &'a Catalog) -> Option<&'a Category> {
        self.open.and_then(|slug| catalog.get(slug))
    }

    /// Toggle `slug`: opens it (closing any other), or closes it if open.
    pub fn click(&mut self, slug: CategorySlug, now: Instant) {
        if self.open == Some(slug) {
            self.close(slug, now + CLICK_CLOSE_COOLDOWN);
        } else {
            self.open = Some(slug);
            tracing::debug!(target: "folio.folder", folder = %slug, "folder opened");
        }
    }

    /// Escape closes the open folder. Returns whether anything closed.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool {
        if key != KeyCode::Escape {
            return false;
        }
        let Some(slug) = self.open else {
            return false;
        };
        self.close(slug, now + ESCAPE_CLOSE_COOLDOWN);
        true
    }

    pub fn pointer_enter(&mut self, slug: CategorySlug) {
        self.hovered = Some(slug);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Variant of `slug` at `now`: open, then hover (unless cooling down),
    /// then closed.
    #[must_use]
    pub fn variant(&self, slug: CategorySlug, now: Instant) -> FolderVariant {
        if self.open == Some(slug) {
            return FolderVariant::Open;
        }
        let cooling = self
            .recently_closed
            .is_some_and(|cooldown| cooldown.slug == slug && now < cooldown.until);
        if self.hovered == Some(slug) && !cooling {
            FolderVariant::Hover
        } else {
            FolderVariant::Closed
        }
    }

    /// `aria-expanded` of the folder button.
    #[must_use]
    pub fn is_expanded(&self, slug: CategorySlug) -> bool {
        self.open == Some(slug)
    }

    /// Button label, e.g. `"Open Brand folder, 8 items"`.
    #[must_use]
    pub fn aria_label(&self, category: &Category) -> String {
        let action = if self.is_expanded(category.slug) {
            "Close"
        } else {
            "Open"
        };
        format!("{action} {} folder, {} items", category.name, category.len())
    }

    fn close(&mut self, slug: CategorySlug, until: Instant) {
        self.open = None;
        // A newer close replaces any pending cooldown.
        self.recently_closed = Some(Cooldown { slug, until });
        tracing::debug!(target: "folio.folder", folder = %slug, "folder closed");
    }
}

/// `aria-controls` id of a folder's panel.
#[must_use]
pub fn panel_id(slug: CategorySlug) -> String {
    format!("folder-panel-{slug}")
}

/// Tag text, e.g. `"Brand · 8"`.
#[must_use]
pub fn tag_label(category: &Category) -> String {
    format!("{} \u{b7} {}", category.name, category.len())
}
