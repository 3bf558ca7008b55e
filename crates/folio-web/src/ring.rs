#![forbid(unsafe_code)]

//! Ring indicator: a slider of ticks, one per item.
//!
//! Dragging across the ring scrubs the active index one item per
//! [`TICK_SPACING`] px. A tap on a tick jumps to it, unless the same press
//! already dragged. Capture is requested when a press commits to a drag.

use folio_core::event::KeyCode;
use folio_layout::drag::DragSession;
use folio_layout::snap::{NavDirection, clamp_index, navigate};

use crate::pointer_capture::CaptureCommand;

/// Distance between tick centres (tick width + gap), in px.
pub const TICK_SPACING: f64 = 9.0;

/// Pointer travel before a press becomes a scrub.
pub const RING_DRAG_THRESHOLD: f64 = 5.0;

/// Accessible name of the slider.
pub const RING_ARIA_LABEL: &str = "Image navigator";

/// What a ring input asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingDispatch {
    /// New active index, when it changed.
    pub index: Option<usize>,
    pub capture_command: Option<CaptureCommand>,
}

impl RingDispatch {
    const NONE: Self = Self {
        index: None,
        capture_command: None,
    };
}

/// Ring indicator controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RingIndicator {
    count: usize,
    active: usize,
    session: Option<DragSession>,
    did_drag: bool,
}

impl RingIndicator {
    #[must_use]
    pub fn new(count: usize, active: usize) -> Self {
        Self {
            count,
            active: clamp_index(active as i64, count),
            session: None,
            did_drag: false,
        }
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Whether a press is currently scrubbing.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.is_committed())
    }

    /// Follow an index chosen elsewhere (carousel drag, keyboard).
    pub fn sync(&mut self, count: usize, active: usize) {
        self.count = count;
        self.active = clamp_index(active as i64, count);
    }

    pub fn pointer_down(&mut self, pointer_id: u32, x: f64) -> RingDispatch {
        self.session = Some(DragSession::begin(pointer_id, x, self.active));
        self.did_drag = false;
        RingDispatch::NONE
    }

    pub fn pointer_move(&mut self, pointer_id: u32, x: f64) -> RingDispatch {
        let Some(mut session) = self.session else {
            return RingDispatch::NONE;
        };
        if session.pointer_id() != pointer_id {
            return RingDispatch::NONE;
        }
        let was_committed = session.is_committed();
        session.update(x, RING_DRAG_THRESHOLD);
        self.session = Some(session);
        if !session.is_committed() {
            return RingDispatch::NONE;
        }

        let mut dispatch = RingDispatch::NONE;
        if !was_committed {
            self.did_drag = true;
            dispatch.capture_command = Some(CaptureCommand::Acquire { pointer_id });
        }
        let steps = js_round(-session.live_delta() / TICK_SPACING);
        let start = i64::try_from(session.start_index()).unwrap_or(i64::MAX);
        let index = clamp_index(start.saturating_add(steps), self.count);
        if index != self.active {
            self.active = index;
            dispatch.index = Some(index);
            tracing::trace!(target: "folio.ring", index, "ring scrubbed");
        }
        dispatch
    }

    /// Pointer-up or pointer-cancel; the browser drops capture on release.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    /// Tap on tick `index`; ignored when the press dragged.
    pub fn tick_click(&mut self, index: usize) -> Option<usize> {
        if self.did_drag || self.count == 0 {
            return None;
        }
        let index = clamp_index(index as i64, self.count);
        self.active = index;
        Some(index)
    }

    /// Slider keys; returns the new index when the key moved it.
    ///
    /// `None` for unhandled keys and for handled keys at a bound.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let next = match key {
            KeyCode::ArrowRight | KeyCode::ArrowDown => {
                navigate(NavDirection::Next, self.active, self.count)
            }
            KeyCode::ArrowLeft | KeyCode::ArrowUp => {
                navigate(NavDirection::Prev, self.active, self.count)
            }
            KeyCode::Home => 0,
            KeyCode::End => self.count - 1,
            KeyCode::Escape => return None,
        };
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(next)
    }

    /// Whether `key` is consumed by the ring (its default action suppressed).
    #[must_use]
    pub const fn handles_key(key: KeyCode) -> bool {
        !matches!(key, KeyCode::Escape)
    }

    /// Per-tick active flags, in item order.
    pub fn ticks(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.count).map(move |index| index == self.active)
    }

    #[must_use]
    pub const fn aria_value_min(&self) -> usize {
        0
    }

    #[must_use]
    pub const fn aria_value_max(&self) -> usize {
        self.count.saturating_sub(1)
    }

    #[must_use]
    pub const fn aria_value_now(&self) -> usize {
        self.active
    }

    /// `"Image N of M"`, with `": label"` when a label exists for the active item.
    #[must_use]
    pub fn value_text<S: AsRef<str>>(&self, labels: &[S]) -> String {
        value_text(self.active, self.count, labels.get(self.active).map(AsRef::as_ref))
    }
}

/// Accessible value text shared by the ring and the scrapbook stage.
#[must_use]
pub fn value_text(active: usize, count: usize, label: Option<&str>) -> String {
    match label.filter(|label| !label.is_empty()) {
        Some(label) => format!("Image {} of {count}: {label}", active + 1),
        None => format!("Image {} of {count}", active + 1),
    }
}

/// Round half toward positive infinity.
fn js_round(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrubbing_moves_one_item_per_tick() {
        let mut ring = RingIndicator::new(12, 5);
        ring.pointer_down(1, 100.0);
        assert_eq!(ring.pointer_move(1, 104.0), RingDispatch::default());
        let commit = ring.pointer_move(1, 82.0);
        // -18 / 9 = -2 -> index 7
        assert_eq!(commit.index, Some(7));
        assert_eq!(commit.capture_command, Some(CaptureCommand::Acquire { pointer_id: 1 }));
        let next = ring.pointer_move(1, 78.0);
        // 22 / 9 = 2.44 -> 2: unchanged
        assert_eq!(next, RingDispatch::default());
        assert!(ring.is_dragging());
        ring.pointer_up();
        assert!(!ring.is_dragging());
        assert_eq!(ring.active_index(), 7);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(js_round(2.5), 3);
        assert_eq!(js_round(-2.5), -2);
        assert_eq!(js_round(-0.4), 0);
        assert_eq!(js_round(f64::NAN), 0);
    }

    #[test]
    fn scrub_clamps_to_bounds() {
        let mut ring = RingIndicator::new(4, 1);
        ring.pointer_down(2, 0.0);
        assert_eq!(ring.pointer_move(2, -400.0).index, Some(3));
        assert_eq!(ring.pointer_move(2, 400.0).index, Some(0));
    }

    #[test]
    fn far_scrub_saturates_to_the_ends() {
        let mut ring = RingIndicator::new(8, 5);
        ring.pointer_down(1, 0.0);
        assert_eq!(ring.pointer_move(1, -1.0e300).index, Some(7));
        assert_eq!(ring.pointer_move(1, 1.0e300).index, Some(0));
        assert_eq!(ring.pointer_move(1, f64::MAX).index, None);
        assert_eq!(ring.active_index(), 0);
    }

    #[test]
    fn tick_click_ignored_after_drag() {
        let mut ring = RingIndicator::new(8, 0);
        ring.pointer_down(1, 50.0);
        ring.pointer_move(1, 30.0);
        ring.pointer_up();
        assert_eq!(ring.tick_click(6), None);

        ring.pointer_down(1, 50.0);
        ring.pointer_up();
        assert_eq!(ring.tick_click(6), Some(6));
        assert_eq!(ring.active_index(), 6);
    }

    #[test]
    fn other_pointers_do_not_scrub() {
        let mut ring = RingIndicator::new(8, 3);
        ring.pointer_down(1, 0.0);
        assert_eq!(ring.pointer_move(2, -90.0), RingDispatch::default());
        assert_eq!(ring.active_index(), 3);
    }

    #[test]
    fn keys_step_and_jump() {
        let mut ring = RingIndicator::new(5, 2);
        assert_eq!(ring.handle_key(KeyCode::ArrowRight), Some(3));
        assert_eq!(ring.handle_key(KeyCode::ArrowDown), Some(4));
        assert_eq!(ring.handle_key(KeyCode::ArrowDown), None);
        assert_eq!(ring.handle_key(KeyCode::Home), Some(0));
        assert_eq!(ring.handle_key(KeyCode::ArrowUp), None);
        assert_eq!(ring.handle_key(KeyCode::End), Some(4));
        assert_eq!(ring.handle_key(KeyCode::Escape), None);
        assert!(RingIndicator::handles_key(KeyCode::Home));
        assert!(!RingIndicator::handles_key(KeyCode::Escape));
    }

    #[test]
    fn aria_values_and_text() {
        let ring = RingIndicator::new(8, 2);
        assert_eq!(ring.aria_value_min(), 0);
        assert_eq!(ring.aria_value_max(), 7);
        assert_eq!(ring.aria_value_now(), 2);
        assert_eq!(ring.value_text(&["a", "b", "Color palette"]), "Image 3 of 8: Color palette");
        assert_eq!(ring.value_text::<&str>(&[]), "Image 3 of 8");
        assert_eq!(value_text(0, 1, Some("")), "Image 1 of 1");
    }

    #[test]
    fn ticks_mark_the_active_item() {
        let ring = RingIndicator::new(4, 1);
        assert_eq!(ring.ticks().collect::<Vec<_>>(), vec![false, true, false, false]);
    }

    #[test]
    fn sync_follows_external_changes() {
        let mut ring = RingIndicator::new(8, 0);
        ring.sync(3, 7);
        assert_eq!(ring.active_index(), 2);
        assert_eq!(ring.count(), 3);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring = RingIndicator::new(0, 0);
        assert_eq!(ring.handle_key(KeyCode::End), None);
        assert_eq!(ring.tick_click(0), None);
        assert_eq!(ring.aria_value_max(), 0);
    }
}
