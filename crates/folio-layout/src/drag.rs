#![forbid(unsafe_code)]

//! Drag session: one pointer gesture from press to release.
//!
//! A session is created on pointer-down and consumed on pointer-up. It
//! classifies the gesture as a click or a drag and converts the final drag
//! delta into an index.
//!
//! # Invariants
//!
//! 1. A session commits to dragging only once `|delta| > threshold`; once
//!    committed it never un-commits.
//! 2. An uncommitted session ends as [`DragOutcome::Click`] and never moves
//!    the active index.
//! 3. [`DragSession::live_delta`] is `0.0` until the session commits, so the
//!    stack does not jitter under a click.

use serde::{Deserialize, Serialize};

use crate::snap::{clamp_index, settle_index, snap_shift};

/// How a finished gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    /// Movement stayed within the threshold: treat as a tap on the target.
    Click,
    /// Movement crossed the threshold: snap to `index`.
    Settled { index: usize, shift: i64 },
}

/// Ephemeral state for one pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pointer_id: u32,
    start_x: f64,
    start_index: usize,
    delta: f64,
    committed: bool,
}

impl DragSession {
    /// Start a gesture for `pointer_id` at `pointer_x` over `active_index`.
    #[must_use]
    pub const fn begin(pointer_id: u32, pointer_x: f64, active_index: usize) -> Self {
        Self {
            pointer_id,
            start_x: pointer_x,
            start_index: active_index,
            delta: 0.0,
            committed: false,
        }
    }

    /// Pointer that owns this session.
    #[must_use]
    pub const fn pointer_id(&self) -> u32 {
        self.pointer_id
    }

    /// Pointer x at press time.
    #[must_use]
    pub const fn start_x(&self) -> f64 {
        self.start_x
    }

    /// Active index at press time.
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// Whether the gesture has crossed the drag threshold.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// Delta applied to item offsets (zero until committed).
    #[must_use]
    pub const fn live_delta(&self) -> f64 {
        self.delta
    }

    /// Feed a pointer position; returns the raw delta `pointer_x - start_x`.
    ///
    /// Commits the session once `|delta| > threshold`. Non-finite positions
    /// are ignored and report the last live delta.
    pub fn update(&mut self, pointer_x: f64, threshold: f64) -> f64 {
        if !pointer_x.is_finite() {
            return self.delta;
        }
        let dx = pointer_x - self.start_x;
        if !self.committed && dx.abs() > threshold {
            self.committed = true;
        }
        if self.committed {
            self.delta = dx;
        }
        dx
    }

    /// Index the gesture would settle on if released now.
    ///
    /// Equal to the (clamped) start index until the session commits.
    #[must_use]
    pub fn projected_index(&self, count: usize, step_spacing: f64, snap_bias: f64) -> usize {
        if self.committed {
            settle_index(self.start_index, self.delta, count, step_spacing, snap_bias)
        } else {
            clamp_index(self.start_index as i64, count)
        }
    }

    /// Finish the gesture.
    #[must_use]
    pub fn end(self, count: usize, step_spacing: f64, snap_bias: f64) -> DragOutcome {
        if !self.committed {
            return DragOutcome::Click;
        }
        DragOutcome::Settled {
            index: settle_index(self.start_index, self.delta, count, step_spacing, snap_bias),
            shift: snap_shift(self.delta, step_spacing, snap_bias),
        }
    }
}
