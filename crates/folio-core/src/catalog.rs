#![forbid(unsafe_code)]

//! Archive catalog: the static, ordered content carousels arrange.
//!
//! Categories are cyclic for cross-category navigation: the category before
//! the first is the last, and vice versa. Items inside a category are not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::{AspectRatio, Item};

/// Archive category slug (URL segment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySlug {
    Brand,
    Product,
    Print,
}

impl CategorySlug {
    /// All slugs in catalog order.
    pub const ALL: [Self; 3] = [Self::Brand, Self::Product, Self::Print];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Product => "product",
            Self::Print => "print",
        }
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySlug {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Lookup of a slug that names no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archive category {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: CategorySlug,
    pub items: Vec<Item>,
}

impl Category {
    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the category has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Captions in item order (used for accessibility labels).
    pub fn captions(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.caption.as_str())
    }
}

/// Ordered set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The portfolio archive: Brand, Product, Print.
    #[must_use]
    pub fn archive() -> Self {
        use AspectRatio as A;

        fn items(entries: &[(u32, &str, Option<AspectRatio>)]) -> Vec<Item> {
            entries
                .iter()
                .map(|&(id, caption, aspect)| Item {
                    id: crate::item::ItemId(id),
                    caption: caption.to_owned(),
                    aspect,
                })
                .collect()
        }

        Self::new(vec![
            Category {
                name: "Brand".to_owned(),
                slug: CategorySlug::Brand,
                items: items(&[
                    (1, "Brand guidelines cover", None),
                    (2, "Logo lockups", Some(A::THREE_TWO)),
                    (3, "Icon system", Some(A::SQUARE)),
                    (4, "Color palette exploration", None),
                    (5, "Typography specimens", Some(A::THREE_TWO)),
                    (6, "Business card design", None),
                    (7, "Brand pattern", Some(A::SQUARE)),
                    (8, "Stationery suite", None),
                ]),
            },
            Category {
                name: "Product".to_owned(),
                slug: CategorySlug::Product,
                items: items(&[
                    (9, "Dashboard overview", None),
                    (10, "Onboarding flow", Some(A::THREE_TWO)),
                    (11, "Settings panel", None),
                    (12, "Profile card", Some(A::SQUARE)),
                    (13, "Data visualization", None),
                    (14, "Mobile navigation", Some(A::THREE_TWO)),
                    (15, "Notification center", None),
                    (16, "Empty state", Some(A::SQUARE)),
                    (17, "Search results", None),
                    (18, "Detail view", Some(A::THREE_TWO)),
                    (19, "Component library", None),
                    (20, "Dark mode variant", None),
                ]),
            },
            Category {
                name: "Print".to_owned(),
                slug: CategorySlug::Print,
                items: items(&[
                    (21, "Event poster", None),
                    (22, "Album artwork", Some(A::SQUARE)),
                    (23, "Magazine spread", Some(A::THREE_TWO)),
                    (24, "Exhibition catalog", None),
                    (25, "Vinyl sleeve", Some(A::SQUARE)),
                    (26, "Zine cover", None),
                ]),
            },
        ])
    }

    /// All categories in order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category for a slug.
    #[must_use]
    pub fn get(&self, slug: CategorySlug) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Category for a URL segment.
    pub fn by_slug(&self, slug: &str) -> Result<&Category, UnknownCategory> {
        slug.parse::<CategorySlug>()
            .ok()
            .and_then(|parsed| self.get(parsed))
            .ok_or_else(|| {
                tracing::debug!(target: "folio.catalog", slug, "unknown archive category");
                UnknownCategory(slug.to_owned())
            })
    }

    /// Previous and next categories around `slug`, wrapping at both ends.
    ///
    /// With a single category both neighbours are that category.
    #[must_use]
    pub fn neighbours(&self, slug: CategorySlug) -> Option<(&Category, &Category)> {
        let len = self.categories.len();
        let index = self.categories.iter().position(|c| c.slug == slug)?;
        let prev = &self.categories[(index + len - 1) % len];
        let next = &self.categories[(index + 1) % len];
        Some((prev, next))
    }
}
