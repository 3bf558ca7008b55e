#![forbid(unsafe_code)]

//! Reader-selected detail level for case-study prose.
//!
//! The choice is persisted in the host key-value store under
//! [`DETAIL_LEVEL_STORAGE_KEY`]. Storage is best-effort: a store that is
//! missing, refuses writes, or holds an unknown value never blocks the
//! in-memory choice.

use std::fmt;
use std::str::FromStr;

use folio_core::platform::{KeyValueStore, PlatformError};
use serde::{Deserialize, Serialize};

/// Storage key holding the persisted level.
pub const DETAIL_LEVEL_STORAGE_KEY: &str = "detail-level";

/// How much case-study prose to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl DetailLevel {
    /// Segmented-control order.
    pub const ALL: [Self; 3] = [Self::Brief, Self::Standard, Self::Detailed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        }
    }

    /// Button title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Brief => "Brief",
            Self::Standard => "Standard",
            Self::Detailed => "Detailed",
        }
    }

    /// Lines drawn in the density icon.
    #[must_use]
    pub const fn icon_lines(self) -> u8 {
        match self {
            Self::Brief => 1,
            Self::Standard => 2,
            Self::Detailed => 3,
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Brief => 0,
            Self::Standard => 1,
            Self::Detailed => 2,
        }
    }

    /// Horizontal offset of the segmented-control highlight, in percent of
    /// one segment.
    #[must_use]
    pub const fn segment_offset_percent(self) -> u32 {
        self.index() as u32 * 100
    }

    /// Pick the variant of some content matching this level.
    pub fn select<T>(self, brief: T, standard: T, detailed: T) -> T {
        match self {
            Self::Brief => brief,
            Self::Standard => standard,
            Self::Detailed => detailed,
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored or supplied text is not a detail level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDetailLevel(pub String);

impl fmt::Display for UnknownDetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown detail level {:?}", self.0)
    }
}

impl std::error::Error for UnknownDetailLevel {}

impl FromStr for DetailLevel {
    type Err = UnknownDetailLevel;

    /// Exact, lowercase match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownDetailLevel(s.to_owned()))
    }
}

/// Current level plus whether it has been reconciled with storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailPreference {
    level: DetailLevel,
    hydrated: bool,
}

impl DetailPreference {
    /// Level before storage is read (the server-rendered default).
    #[must_use]
    pub const fn unhydrated() -> Self {
        Self {
            level: DetailLevel::Standard,
            hydrated: false,
        }
    }

    /// Read the persisted level, falling back to `Standard`.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let level = match store.get(DETAIL_LEVEL_STORAGE_KEY) {
            Some(raw) => raw.parse::<DetailLevel>().unwrap_or_else(|err: UnknownDetailLevel| {
                tracing::debug!(target: "folio.detail", error = %err, "ignoring stored detail level");
                DetailLevel::default()
            }),
            None => DetailLevel::default(),
        };
        Self {
            level,
            hydrated: true,
        }
    }

    #[must_use]
    pub const fn level(&self) -> DetailLevel {
        self.level
    }

    /// Whether storage has been consulted; before that, hosts render the
    /// default without the toggle context.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Change the level and persist it.
    ///
    /// The in-memory level changes even when the write fails; the error is
    /// returned so hosts can surface it.
    pub fn set(
        &mut self,
        level: DetailLevel,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), PlatformError> {
        self.level = level;
        store
            .set(DETAIL_LEVEL_STORAGE_KEY, level.as_str())
            .inspect_err(|err| {
                tracing::warn!(
                    target: "folio.detail",
                    level = %level,
                    error = %err,
                    "failed to persist detail level"
                );
            })
    }

    /// [`DetailLevel::select`] on the current level.
    pub fn select<T>(&self, brief: T, standard: T, detailed: T) -> T {
        self.level.select(brief, standard, detailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::geometry::Size;
    use folio_core::platform::MemoryPlatform;
    use pretty_assertions::assert_eq;

    fn platform() -> MemoryPlatform {
        MemoryPlatform::new(Size::new(1024.0, 768.0))
    }

    #[test]
    fn defaults_to_standard() {
        assert_eq!(DetailLevel::default(), DetailLevel::Standard);
        let pref = DetailPreference::load(&platform());
        assert_eq!(pref.level(), DetailLevel::Standard);
        assert!(pref.is_hydrated());
        assert!(!DetailPreference::unhydrated().is_hydrated());
    }

    #[test]
    fn set_persists_and_reloads() {
        let mut platform = platform();
        let mut pref = DetailPreference::load(&platform);
        pref.set(DetailLevel::Detailed, &mut platform)
            .expect("memory storage accepts writes");
        assert_eq!(
            platform.get(DETAIL_LEVEL_STORAGE_KEY).as_deref(),
            Some("detailed")
        );
        assert_eq!(DetailPreference::load(&platform).level(), DetailLevel::Detailed);
    }

    #[test]
    fn unknown_stored_values_are_ignored() {
        let mut platform = platform();
        platform
            .set(DETAIL_LEVEL_STORAGE_KEY, "Verbose")
            .expect("memory storage accepts writes");
        assert_eq!(DetailPreference::load(&platform).level(), DetailLevel::Standard);
        platform
            .set(DETAIL_LEVEL_STORAGE_KEY, "Brief")
            .expect("memory storage accepts writes");
        assert_eq!(DetailPreference::load(&platform).level(), DetailLevel::Standard);
    }

    #[test]
    fn failed_write_still_changes_level() {
        let mut platform = platform().without_storage();
        let mut pref = DetailPreference::load(&platform);
        let err = pref
            .set(DetailLevel::Brief, &mut platform)
            .expect_err("disabled storage rejects writes");
        assert_eq!(err, PlatformError::StorageUnavailable);
        assert_eq!(pref.level(), DetailLevel::Brief);
    }

    #[test]
    fn segments_and_icons() {
        let offsets: Vec<u32> = DetailLevel::ALL
            .iter()
            .map(|level| level.segment_offset_percent())
            .collect();
        assert_eq!(offsets, vec![0, 100, 200]);
        let lines: Vec<u8> = DetailLevel::ALL.iter().map(|level| level.icon_lines()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert_eq!(DetailLevel::Detailed.title(), "Detailed");
    }

    #[test]
    fn select_picks_matching_content() {
        let pref = DetailPreference::load(&platform());
        assert_eq!(pref.select("one line", "two lines", "three lines"), "two lines");
        assert_eq!(DetailLevel::Brief.select(1, 2, 3), 1);
    }

    #[test]
    fn parse_round_trips_names() {
        for level in DetailLevel::ALL {
            assert_eq!(level.to_string().parse::<DetailLevel>(), Ok(level));
        }
        assert_eq!(
            "".parse::<DetailLevel>(),
            Err(UnknownDetailLevel(String::new()))
        );
    }
}
