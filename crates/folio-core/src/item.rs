#![forbid(unsafe_code)]

//! Carousel items and aspect ratios.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aspect ratio assumed for items without an explicit (or with a malformed)
/// ratio. Also the default optical reference for scale compensation.
pub const DEFAULT_REFERENCE_ASPECT: f64 = 4.0 / 3.0;

/// Stable integer identity of an item.
///
/// Identity seeds per-item rotation, so it must not change across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Raw identity value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the identity is even (drives the alternating rotation pattern).
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item aspect ratio written as `width/height` (e.g. `3/2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    width: u16,
    height: u16,
}

impl AspectRatio {
    pub const FOUR_THREE: Self = Self::new(4, 3);
    pub const THREE_TWO: Self = Self::new(3, 2);
    pub const SQUARE: Self = Self::new(1, 1);
    pub const TWO_THREE: Self = Self::new(2, 3);
    pub const SIXTEEN_NINE: Self = Self::new(16, 9);

    /// Create a ratio. Zero components are representable but evaluate to the
    /// default reference aspect.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Ratio numerator.
    #[must_use]
    pub const fn width(self) -> u16 {
        self.width
    }

    /// Ratio denominator.
    #[must_use]
    pub const fn height(self) -> u16 {
        self.height
    }

    /// `width / height`, or [`DEFAULT_REFERENCE_ASPECT`] when degenerate.
    #[must_use]
    pub fn value(self) -> f64 {
        if self.width == 0 || self.height == 0 {
            return DEFAULT_REFERENCE_ASPECT;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    /// Value of an optional ratio, defaulting missing ratios to 4/3.
    #[must_use]
    pub fn value_or_default(ratio: Option<Self>) -> f64 {
        ratio.map_or(DEFAULT_REFERENCE_ASPECT, Self::value)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

/// Failure to parse a `width/height` ratio string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAspectRatioError {
    input: String,
}

impl fmt::Display for ParseAspectRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid aspect ratio {:?} (expected `width/height`)", self.input)
    }
}

impl std::error::Error for ParseAspectRatioError {}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAspectRatioError {
            input: s.to_owned(),
        };
        let (w, h) = s.split_once('/').ok_or_else(err)?;
        let width = w.trim().parse::<u16>().map_err(|_| err())?;
        let height = h.trim().parse::<u16>().map_err(|_| err())?;
        Ok(Self::new(width, height))
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ParseAspectRatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.to_string()
    }
}

/// An immutable carousel entry supplied by static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<AspectRatio>,
}

impl Item {
    /// Create an item with the default (4/3) aspect.
    #[must_use]
    pub fn new(id: u32, caption: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            caption: caption.into(),
            aspect: None,
        }
    }

    /// Set an explicit aspect ratio.
    #[must_use]
    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Numeric aspect (`width / height`), defaulting to 4/3.
    #[must_use]
    pub fn aspect_value(&self) -> f64 {
        AspectRatio::value_or_default(self.aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ratio_strings() {
        assert_eq!("3/2".parse::<AspectRatio>(), Ok(AspectRatio::THREE_TWO));
        assert_eq!(" 16 / 9 ".parse::<AspectRatio>(), Ok(AspectRatio::SIXTEEN_NINE));
        assert!("3:2".parse::<AspectRatio>().is_err());
        assert!("wide/1".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn degenerate_ratio_falls_back_to_reference() {
        assert_eq!(AspectRatio::new(0, 3).value(), DEFAULT_REFERENCE_ASPECT);
        assert_eq!(AspectRatio::new(3, 0).value(), DEFAULT_REFERENCE_ASPECT);
        assert_eq!(AspectRatio::value_or_default(None), DEFAULT_REFERENCE_ASPECT);
    }

    #[test]
    fn item_aspect_value() {
        let item = Item::new(3, "Icon system").with_aspect(AspectRatio::SQUARE);
        assert_eq!(item.aspect_value(), 1.0);
        assert_eq!(Item::new(1, "Cover").aspect_value(), 4.0 / 3.0);
    }

    #[test]
    fn item_deserializes_ratio_from_string() {
        let item: Item =
            serde_json::from_str(r#"{"id":2,"caption":"Logo lockups","aspect":"3/2"}"#)
                .expect("item json should parse");
        assert_eq!(item.id, ItemId(2));
        assert_eq!(item.aspect, Some(AspectRatio::THREE_TWO));

        let bad = serde_json::from_str::<Item>(r#"{"id":2,"caption":"x","aspect":"3x2"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn id_parity() {
        assert!(ItemId(4).is_even());
        assert!(!ItemId(7).is_even());
    }
}
