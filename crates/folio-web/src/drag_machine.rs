#![forbid(unsafe_code)]

//! Deterministic carousel drag lifecycle.
//!
//! ```text
//! Idle -> PotentialDrag -> Dragging -> Idle
//!    \------> Idle (click or cancel from PotentialDrag)
//! ```
//!
//! Every input is a sequenced [`CarouselInputEvent`]. Every accepted event
//! yields exactly one [`CarouselDragTransition`], including explicit
//! [`CarouselDragEffect::Noop`] diagnostics for inputs that are safely ignored.

use std::fmt;

use folio_core::event::PointerButton;
use folio_layout::drag::{DragOutcome, DragSession};
use folio_layout::params::{CarouselParams, DragParams};
use serde::{Deserialize, Serialize};

/// Why an active gesture was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselCancelReason {
    PointerCancel,
    LostPointerCapture,
    Blur,
    VisibilityHidden,
    Programmatic,
}

/// Carousel input event kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CarouselInputEventKind {
    PointerDown {
        pointer_id: u32,
        button: PointerButton,
        x: f64,
        /// Active index at press time.
        active_index: usize,
        /// Number of items the gesture may settle across.
        item_count: usize,
    },
    PointerMove {
        pointer_id: u32,
        x: f64,
    },
    PointerUp {
        pointer_id: u32,
        button: PointerButton,
    },
    Cancel {
        reason: CarouselCancelReason,
    },
}

/// Sequenced carousel input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselInputEvent {
    pub sequence: u64,
    #[serde(flatten)]
    pub kind: CarouselInputEventKind,
}

impl CarouselInputEvent {
    #[must_use]
    pub const fn new(sequence: u64, kind: CarouselInputEventKind) -> Self {
        Self { sequence, kind }
    }

    /// Validate invariants required for deterministic replay.
    pub fn validate(&self) -> Result<(), CarouselInputEventError> {
        if self.sequence == 0 {
            return Err(CarouselInputEventError::ZeroSequence);
        }
        match self.kind {
            CarouselInputEventKind::PointerDown { pointer_id, x, .. }
            | CarouselInputEventKind::PointerMove { pointer_id, x } => {
                if pointer_id == 0 {
                    return Err(CarouselInputEventError::ZeroPointerId);
                }
                if !x.is_finite() {
                    return Err(CarouselInputEventError::NonFiniteCoordinate);
                }
            }
            CarouselInputEventKind::PointerUp { pointer_id, .. } => {
                if pointer_id == 0 {
                    return Err(CarouselInputEventError::ZeroPointerId);
                }
            }
            CarouselInputEventKind::Cancel { .. } => {}
        }
        Ok(())
    }
}

/// Validation failures for carousel input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInputEventError {
    ZeroSequence,
    ZeroPointerId,
    NonFiniteCoordinate,
}

impl fmt::Display for CarouselInputEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSequence => write!(f, "carousel input event sequence must be non-zero"),
            Self::ZeroPointerId => {
                write!(f, "carousel pointer events require non-zero pointer_id")
            }
            Self::NonFiniteCoordinate => {
                write!(f, "carousel pointer coordinates must be finite")
            }
        }
    }
}

impl std::error::Error for CarouselInputEventError {}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CarouselDragState {
    Idle,
    PotentialDrag {
        session: DragSession,
        item_count: usize,
        started_sequence: u64,
    },
    Dragging {
        session: DragSession,
        item_count: usize,
        started_sequence: u64,
        drag_started_sequence: u64,
    },
}

impl CarouselDragState {
    /// Pointer that owns the active gesture, if any.
    #[must_use]
    pub const fn pointer_id(&self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::PotentialDrag { session, .. } | Self::Dragging { session, .. } => {
                Some(session.pointer_id())
            }
        }
    }

    /// Whether the gesture has crossed the drag threshold.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Explicit no-op diagnostics for inputs that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselDragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    PointerMismatch,
    ThresholdNotReached,
}

/// Transition effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum CarouselDragEffect {
    Armed {
        pointer_id: u32,
        origin_x: f64,
        start_index: usize,
    },
    DragStarted {
        pointer_id: u32,
        origin_x: f64,
        delta: f64,
        projected_index: usize,
    },
    DragUpdated {
        pointer_id: u32,
        previous_delta: f64,
        delta: f64,
        projected_index: usize,
    },
    /// Released without crossing the threshold.
    Clicked { pointer_id: u32, index: usize },
    /// Released after dragging; `index` is the new active index.
    Settled {
        pointer_id: u32,
        start_index: usize,
        index: usize,
        shift: i64,
        delta: f64,
    },
    Canceled {
        pointer_id: Option<u32>,
        reason: CarouselCancelReason,
    },
    Noop {
        reason: CarouselDragNoopReason,
    },
}

/// One state-machine transition with deterministic telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselDragTransition {
    pub transition_id: u64,
    pub sequence: u64,
    pub from: CarouselDragState,
    pub to: CarouselDragState,
    pub effect: CarouselDragEffect,
}

/// Runtime lifecycle machine for carousel drags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselDragMachine {
    state: CarouselDragState,
    drag: DragParams,
    step_spacing: f64,
    transition_counter: u64,
}

impl Default for CarouselDragMachine {
    fn default() -> Self {
        let params = CarouselParams::default();
        Self {
            state: CarouselDragState::Idle,
            drag: params.drag,
            step_spacing: params.step_spacing(),
            transition_counter: 0,
        }
    }
}

impl CarouselDragMachine {
    /// Construct a machine with explicit drag tuning and snap step spacing.
    pub fn new(drag: DragParams, step_spacing: f64) -> Result<Self, CarouselDragMachineError> {
        if !drag.threshold.is_finite() || drag.threshold < 0.0 {
            return Err(CarouselDragMachineError::InvalidDragThreshold {
                threshold: drag.threshold,
            });
        }
        if !(drag.snap_bias > 0.0 && drag.snap_bias < 1.0) {
            return Err(CarouselDragMachineError::InvalidSnapBias {
                bias: drag.snap_bias,
            });
        }
        Ok(Self {
            state: CarouselDragState::Idle,
            drag,
            step_spacing,
            transition_counter: 0,
        })
    }

    /// Construct a machine from full carousel parameters.
    pub fn from_params(params: &CarouselParams) -> Result<Self, CarouselDragMachineError> {
        Self::new(params.drag, params.step_spacing())
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CarouselDragState {
        self.state
    }

    /// Configured drag tuning.
    #[must_use]
    pub const fn drag_params(&self) -> DragParams {
        self.drag
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, CarouselDragState::Idle)
    }

    /// Live drag delta to feed the positioner (zero unless dragging).
    #[must_use]
    pub const fn live_delta(&self) -> f64 {
        match self.state {
            CarouselDragState::Dragging { session, .. } => session.live_delta(),
            _ => 0.0,
        }
    }

    /// Index the current gesture would settle on, if one is in progress.
    #[must_use]
    pub fn projected_index(&self) -> Option<usize> {
        match self.state {
            CarouselDragState::Idle => None,
            CarouselDragState::PotentialDrag {
                session,
                item_count,
                ..
            }
            | CarouselDragState::Dragging {
                session,
                item_count,
                ..
            } => Some(session.projected_index(item_count, self.step_spacing, self.drag.snap_bias)),
        }
    }

    /// Reset to Idle without an input event.
    ///
    /// Returns `None` when already idle.
    pub fn force_cancel(&mut self) -> Option<CarouselDragTransition> {
        let from = self.state;
        let pointer_id = from.pointer_id()?;
        self.state = CarouselDragState::Idle;
        self.transition_counter = self.transition_counter.saturating_add(1);
        Some(CarouselDragTransition {
            transition_id: self.transition_counter,
            sequence: 0,
            from,
            to: CarouselDragState::Idle,
            effect: CarouselDragEffect::Canceled {
                pointer_id: Some(pointer_id),
                reason: CarouselCancelReason::Programmatic,
            },
        })
    }

    /// Apply one input event and emit a deterministic transition.
    pub fn apply_event(
        &mut self,
        event: &CarouselInputEvent,
    ) -> Result<CarouselDragTransition, CarouselDragMachineError> {
        event
            .validate()
            .map_err(CarouselDragMachineError::InvalidEvent)?;

        let from = self.state;
        let effect = match (self.state, event.kind) {
            (
                CarouselDragState::Idle,
                CarouselInputEventKind::PointerDown {
                    pointer_id,
                    x,
                    active_index,
                    item_count,
                    ..
                },
            ) => {
                let session = DragSession::begin(pointer_id, x, active_index);
                self.state = CarouselDragState::PotentialDrag {
                    session,
                    item_count,
                    started_sequence: event.sequence,
                };
                CarouselDragEffect::Armed {
                    pointer_id,
                    origin_x: x,
                    start_index: active_index,
                }
            }
            (CarouselDragState::Idle, _) => CarouselDragEffect::Noop {
                reason: CarouselDragNoopReason::IdleWithoutActiveDrag,
            },
            (
                CarouselDragState::PotentialDrag { .. } | CarouselDragState::Dragging { .. },
                CarouselInputEventKind::PointerDown { .. },
            ) => CarouselDragEffect::Noop {
                reason: CarouselDragNoopReason::ActiveDragAlreadyInProgress,
            },
            (
                CarouselDragState::PotentialDrag {
                    mut session,
                    item_count,
                    started_sequence,
                },
                CarouselInputEventKind::PointerMove { pointer_id, x },
            ) => {
                if pointer_id != session.pointer_id() {
                    CarouselDragEffect::Noop {
                        reason: CarouselDragNoopReason::PointerMismatch,
                    }
                } else {
                    session.update(x, self.drag.threshold);
                    if session.is_committed() {
                        self.state = CarouselDragState::Dragging {
                            session,
                            item_count,
                            started_sequence,
                            drag_started_sequence: event.sequence,
                        };
                        CarouselDragEffect::DragStarted {
                            pointer_id,
                            origin_x: session.start_x(),
                            delta: session.live_delta(),
                            projected_index: session.projected_index(
                                item_count,
                                self.step_spacing,
                                self.drag.snap_bias,
                            ),
                        }
                    } else {
                        self.state = CarouselDragState::PotentialDrag {
                            session,
                            item_count,
                            started_sequence,
                        };
                        CarouselDragEffect::Noop {
                            reason: CarouselDragNoopReason::ThresholdNotReached,
                        }
                    }
                }
            }
            (
                CarouselDragState::Dragging {
                    mut session,
                    item_count,
                    started_sequence,
                    drag_started_sequence,
                },
                CarouselInputEventKind::PointerMove { pointer_id, x },
            ) => {
                if pointer_id != session.pointer_id() {
                    CarouselDragEffect::Noop {
                        reason: CarouselDragNoopReason::PointerMismatch,
                    }
                } else {
                    let previous_delta = session.live_delta();
                    session.update(x, self.drag.threshold);
                    self.state = CarouselDragState::Dragging {
                        session,
                        item_count,
                        started_sequence,
                        drag_started_sequence,
                    };
                    CarouselDragEffect::DragUpdated {
                        pointer_id,
                        previous_delta,
                        delta: session.live_delta(),
                        projected_index: session.projected_index(
                            item_count,
                            self.step_spacing,
                            self.drag.snap_bias,
                        ),
                    }
                }
            }
            (
                CarouselDragState::PotentialDrag {
                    session,
                    item_count,
                    ..
                }
                | CarouselDragState::Dragging {
                    session,
                    item_count,
                    ..
                },
                CarouselInputEventKind::PointerUp { pointer_id, .. },
            ) => {
                if pointer_id != session.pointer_id() {
                    CarouselDragEffect::Noop {
                        reason: CarouselDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = CarouselDragState::Idle;
                    let delta = session.live_delta();
                    let start_index = session.start_index();
                    match session.end(item_count, self.step_spacing, self.drag.snap_bias) {
                        DragOutcome::Click => CarouselDragEffect::Clicked {
                            pointer_id,
                            index: folio_layout::snap::clamp_index(start_index as i64, item_count),
                        },
                        DragOutcome::Settled { index, shift } => CarouselDragEffect::Settled {
                            pointer_id,
                            start_index,
                            index,
                            shift,
                            delta,
                        },
                    }
                }
            }
            (
                CarouselDragState::PotentialDrag { session, .. }
                | CarouselDragState::Dragging { session, .. },
                CarouselInputEventKind::Cancel { reason },
            ) => {
                self.state = CarouselDragState::Idle;
                CarouselDragEffect::Canceled {
                    pointer_id: Some(session.pointer_id()),
                    reason,
                }
            }
        };

        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = CarouselDragTransition {
            transition_id: self.transition_counter,
            sequence: event.sequence,
            from,
            to: self.state,
            effect,
        };
        log_transition(&transition);
        Ok(transition)
    }
}

fn log_transition(transition: &CarouselDragTransition) {
    match transition.effect {
        CarouselDragEffect::Noop { reason } => tracing::trace!(
            target: "folio.drag",
            sequence = transition.sequence,
            reason = ?reason,
            "drag input ignored"
        ),
        CarouselDragEffect::DragUpdated { .. } => tracing::trace!(
            target: "folio.drag",
            sequence = transition.sequence,
            effect = ?transition.effect,
            "drag updated"
        ),
        effect => tracing::debug!(
            target: "folio.drag",
            transition_id = transition.transition_id,
            sequence = transition.sequence,
            effect = ?effect,
            "drag transition"
        ),
    }
}

/// Lifecycle machine configuration/runtime errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselDragMachineError {
    InvalidDragThreshold { threshold: f64 },
    InvalidSnapBias { bias: f64 },
    InvalidEvent(CarouselInputEventError),
}

impl fmt::Display for CarouselDragMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDragThreshold { threshold } => {
                write!(f, "drag threshold must be finite and >= 0 (got {threshold})")
            }
            Self::InvalidSnapBias { bias } => {
                write!(f, "snap bias must be in (0, 1) (got {bias})")
            }
            Self::InvalidEvent(error) => write!(f, "invalid carousel input event: {error}"),
        }
    }
}

impl std::error::Error for CarouselDragMachineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidEvent(error) = self {
            return Some(error);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(sequence: u64, pointer_id: u32, x: f64, active_index: usize) -> CarouselInputEvent {
        CarouselInputEvent::new(
            sequence,
            CarouselInputEventKind::PointerDown {
                pointer_id,
                button: PointerButton::Primary,
                x,
                active_index,
                item_count: 8,
            },
        )
    }

    fn mv(sequence: u64, pointer_id: u32, x: f64) -> CarouselInputEvent {
        CarouselInputEvent::new(sequence, CarouselInputEventKind::PointerMove { pointer_id, x })
    }

    fn up(sequence: u64, pointer_id: u32) -> CarouselInputEvent {
        CarouselInputEvent::new(
            sequence,
            CarouselInputEventKind::PointerUp {
                pointer_id,
                button: PointerButton::Primary,
            },
        )
    }

    fn cancel(sequence: u64, reason: CarouselCancelReason) -> CarouselInputEvent {
        CarouselInputEvent::new(sequence, CarouselInputEventKind::Cancel { reason })
    }

    fn machine() -> CarouselDragMachine {
        CarouselDragMachine::from_params(&CarouselParams::default())
            .expect("default params should build a machine")
    }

    fn apply(machine: &mut CarouselDragMachine, event: CarouselInputEvent) -> CarouselDragTransition {
        machine.apply_event(&event).expect("event should be valid")
    }

    #[test]
    fn down_arms_and_records_start() {
        let mut machine = machine();
        let t = apply(&mut machine, down(1, 7, 500.0, 3));
        assert_eq!(t.from, CarouselDragState::Idle);
        assert!(matches!(t.to, CarouselDragState::PotentialDrag { started_sequence: 1, .. }));
        assert_eq!(
            t.effect,
            CarouselDragEffect::Armed {
                pointer_id: 7,
                origin_x: 500.0,
                start_index: 3
            }
        );
        assert_eq!(machine.state().pointer_id(), Some(7));
        assert_eq!(machine.projected_index(), Some(3));
    }

    #[test]
    fn below_threshold_moves_are_noops_and_release_clicks() {
        let mut machine = machine();
        apply(&mut machine, down(1, 7, 500.0, 3));
        let t = apply(&mut machine, mv(2, 7, 504.0));
        assert_eq!(
            t.effect,
            CarouselDragEffect::Noop {
                reason: CarouselDragNoopReason::ThresholdNotReached
            }
        );
        assert_eq!(machine.live_delta(), 0.0);
        let t = apply(&mut machine, up(3, 7));
        assert_eq!(t.effect, CarouselDragEffect::Clicked { pointer_id: 7, index: 3 });
        assert_eq!(machine.state(), CarouselDragState::Idle);
    }

    #[test]
    fn full_drag_settles_on_projected_index() {
        let mut machine = machine();
        apply(&mut machine, down(1, 7, 500.0, 3));
        let started = apply(&mut machine, mv(2, 7, 480.0));
        assert!(matches!(
            started.effect,
            CarouselDragEffect::DragStarted { delta, .. } if delta == -20.0
        ));
        assert!(machine.state().is_dragging());

        let updated = apply(&mut machine, mv(3, 7, 370.0));
        assert!(matches!(
            updated.effect,
            CarouselDragEffect::DragUpdated {
                previous_delta,
                delta,
                projected_index: 6,
                ..
            } if previous_delta == -20.0 && delta == -130.0
        ));
        assert_eq!(machine.live_delta(), -130.0);

        let settled = apply(&mut machine, up(4, 7));
        assert_eq!(
            settled.effect,
            CarouselDragEffect::Settled {
                pointer_id: 7,
                start_index: 3,
                index: 6,
                shift: 3,
                delta: -130.0
            }
        );
        assert_eq!(machine.state(), CarouselDragState::Idle);
        assert_eq!(machine.live_delta(), 0.0);
        assert_eq!(machine.projected_index(), None);
    }

    #[test]
    fn pointer_mismatch_is_a_noop() {
        let mut machine = machine();
        apply(&mut machine, down(1, 7, 0.0, 0));
        let before = machine.state();
        let t = apply(&mut machine, mv(2, 8, -100.0));
        assert_eq!(
            t.effect,
            CarouselDragEffect::Noop {
                reason: CarouselDragNoopReason::PointerMismatch
            }
        );
        assert_eq!(machine.state(), before);
        let t = apply(&mut machine, up(3, 8));
        assert!(matches!(t.effect, CarouselDragEffect::Noop { .. }));
        assert!(machine.is_active());
    }

    #[test]
    fn cancel_discards_delta() {
        let mut machine = machine();
        apply(&mut machine, down(1, 7, 500.0, 3));
        apply(&mut machine, mv(2, 7, 300.0));
        let t = apply(&mut machine, cancel(3, CarouselCancelReason::PointerCancel));
        assert_eq!(
            t.effect,
            CarouselDragEffect::Canceled {
                pointer_id: Some(7),
                reason: CarouselCancelReason::PointerCancel
            }
        );
        assert_eq!(machine.live_delta(), 0.0);
        assert!(!machine.is_active());
    }

    #[test]
    fn second_down_while_active_is_rejected() {
        let mut machine = machine();
        apply(&mut machine, down(1, 7, 0.0, 0));
        let t = apply(&mut machine, down(2, 9, 10.0, 0));
        assert_eq!(
            t.effect,
            CarouselDragEffect::Noop {
                reason: CarouselDragNoopReason::ActiveDragAlreadyInProgress
            }
        );
        assert_eq!(machine.state().pointer_id(), Some(7));
    }

    #[test]
    fn idle_ignores_moves_ups_and_cancels() {
        let mut machine = machine();
        for event in [
            mv(1, 7, 10.0),
            up(2, 7),
            cancel(3, CarouselCancelReason::Blur),
        ] {
            let t = apply(&mut machine, event);
            assert_eq!(
                t.effect,
                CarouselDragEffect::Noop {
                    reason: CarouselDragNoopReason::IdleWithoutActiveDrag
                }
            );
        }
        assert_eq!(machine.force_cancel(), None);
    }

    #[test]
    fn transition_ids_increase_monotonically() {
        let mut machine = machine();
        let ids: Vec<u64> = [down(1, 7, 0.0, 0), mv(2, 7, -50.0), up(3, 7)]
            .into_iter()
            .map(|event| apply(&mut machine, event).transition_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn invalid_events_are_rejected_without_state_change() {
        let mut machine = machine();
        let err = machine.apply_event(&down(0, 7, 0.0, 0)).unwrap_err();
        assert_eq!(
            err,
            CarouselDragMachineError::InvalidEvent(CarouselInputEventError::ZeroSequence)
        );
        let err = machine.apply_event(&down(1, 0, 0.0, 0)).unwrap_err();
        assert_eq!(
            err,
            CarouselDragMachineError::InvalidEvent(CarouselInputEventError::ZeroPointerId)
        );
        let err = machine.apply_event(&mv(2, 7, f64::NAN)).unwrap_err();
        assert_eq!(
            err,
            CarouselDragMachineError::InvalidEvent(CarouselInputEventError::NonFiniteCoordinate)
        );
        assert_eq!(machine.state(), CarouselDragState::Idle);
    }

    #[test]
    fn constructor_validates_tuning() {
        let bad_threshold = DragParams {
            threshold: -1.0,
            ..DragParams::default()
        };
        assert!(matches!(
            CarouselDragMachine::new(bad_threshold, 40.0),
            Err(CarouselDragMachineError::InvalidDragThreshold { .. })
        ));
        let bad_bias = DragParams {
            snap_bias: 1.0,
            ..DragParams::default()
        };
        assert!(matches!(
            CarouselDragMachine::new(bad_bias, 40.0),
            Err(CarouselDragMachineError::InvalidSnapBias { .. })
        ));
    }

    #[test]
    fn force_cancel_resets_active_gesture() {
        let mut machine = machine();
        apply(&mut machine, down(1, 4, 0.0, 2));
        let t = machine.force_cancel().expect("active gesture should cancel");
        assert_eq!(t.sequence, 0);
        assert_eq!(
            t.effect,
            CarouselDragEffect::Canceled {
                pointer_id: Some(4),
                reason: CarouselCancelReason::Programmatic
            }
        );
        assert!(!machine.is_active());
    }

    #[test]
    fn transitions_serialize_with_tags() {
        let mut machine = machine();
        let t = apply(&mut machine, down(1, 7, 12.5, 1));
        let json = serde_json::to_value(t).expect("transition should serialize");
        assert_eq!(json["effect"]["effect"], "armed");
        assert_eq!(json["to"]["state"], "potential_drag");
        let event = serde_json::to_value(up(2, 7)).expect("event should serialize");
        assert_eq!(event["event"], "pointer_up");
        assert_eq!(event["sequence"], 2);
    }
}
