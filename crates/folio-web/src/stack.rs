#![forbid(unsafe_code)]

//! Card and figure stacks: a looping deck where the front card advances.

use folio_core::item::AspectRatio;
use folio_layout::snap::{NavDirection, wrapping_navigate};
use folio_layout::stack::stack_position;
use serde::{Deserialize, Serialize};

/// Aspect of a figure without an explicit ratio.
pub const DEFAULT_FIGURE_ASPECT: AspectRatio = AspectRatio::SIXTEEN_NINE;

/// Text card in a case-study stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Captioned image placeholder in a figure stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<AspectRatio>,
}

impl Figure {
    #[must_use]
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            aspect: None,
        }
    }

    #[must_use]
    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Explicit aspect, or 16/9.
    #[must_use]
    pub fn aspect_or_default(&self) -> AspectRatio {
        self.aspect.unwrap_or(DEFAULT_FIGURE_ASPECT)
    }
}

/// One entry of a rendered stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry<'a, T> {
    pub index: usize,
    /// `0` for the front card.
    pub depth: usize,
    pub value: &'a T,
}

impl<T> StackEntry<'_, T> {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.depth == 0
    }
}

/// Looping stack of entries with one front entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappingStack<T> {
    entries: Vec<T>,
    active: usize,
}

pub type CardStack = WrappingStack<Card>;
pub type FigureStack = WrappingStack<Figure>;

impl<T> WrappingStack<T> {
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries, active: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.entries.get(self.active)
    }

    /// Advance to the next entry, looping past the last.
    pub fn advance(&mut self) -> usize {
        self.active = wrapping_navigate(NavDirection::Next, self.active, self.entries.len());
        self.active
    }

    /// Click on entry `index`: a non-front entry advances the stack by one.
    ///
    /// Returns whether the stack advanced.
    pub fn click(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.active {
            return false;
        }
        self.advance();
        true
    }

    /// Depth of `index` behind the front entry.
    #[must_use]
    pub fn position(&self, index: usize) -> usize {
        stack_position(index, self.active, self.entries.len())
    }

    /// `"N / M"` counter.
    #[must_use]
    pub fn counter(&self) -> String {
        if self.entries.is_empty() {
            return "0 / 0".to_owned();
        }
        format!("{} / {}", self.active + 1, self.entries.len())
    }

    /// Entries in item order with their stack depth.
    pub fn entries(&self) -> impl Iterator<Item = StackEntry<'_, T>> {
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, value)| StackEntry {
                index,
                depth: self.position(index),
                value,
            })
    }
}

impl WrappingStack<Figure> {
    /// Caption of the front figure.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.active().map(|figure| figure.caption.as_str())
    }
}
