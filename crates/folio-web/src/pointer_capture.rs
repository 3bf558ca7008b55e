#![forbid(unsafe_code)]

//! Deterministic pointer-capture adapter for carousel drags.
//!
//! Bridges browser pointer lifecycle signals into [`CarouselInputEvent`]s
//! while enforcing:
//! - one active pointer at a time,
//! - capture requested only once the gesture commits to a drag, and
//! - release on every exit path where capture was requested.

use folio_core::event::PointerButton;
use folio_core::platform::PointerCapture;
use folio_layout::params::CarouselParams;
use serde::{Deserialize, Serialize};

use crate::drag_machine::{
    CarouselCancelReason, CarouselDragEffect, CarouselDragMachine, CarouselDragMachineError,
    CarouselDragState, CarouselDragTransition, CarouselInputEvent, CarouselInputEventKind,
};

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerCaptureConfig {
    /// Button required to begin a gesture.
    pub activation_button: PointerButton,
}

impl Default for PointerCaptureConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    None,
    Requested,
    Acquired,
}

impl CaptureState {
    const fn needs_release(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePointer {
    pointer_id: u32,
    button: PointerButton,
    capture_state: CaptureState,
}

/// Host command for browser pointer-capture control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CaptureCommand {
    Acquire { pointer_id: u32 },
    Release { pointer_id: u32 },
}

impl CaptureCommand {
    /// Execute the command against a host capability.
    pub fn apply(self, target: &mut dyn PointerCapture) {
        match self {
            Self::Acquire { pointer_id } => target.set_pointer_capture(pointer_id),
            Self::Release { pointer_id } => target.release_pointer_capture(pointer_id),
        }
    }
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerLifecyclePhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    Blur,
    VisibilityHidden,
    LostPointerCapture,
    CaptureAcquired,
}

/// Reason an incoming lifecycle signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    MachineRejectedEvent,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum PointerLogOutcome {
    EventForwarded,
    CaptureStateUpdated,
    Ignored(PointerIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerLogEntry {
    pub phase: PointerLifecyclePhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub x: Option<f64>,
    pub capture_command: Option<CaptureCommand>,
    pub outcome: PointerLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDispatch {
    pub event: Option<CarouselInputEvent>,
    pub transition: Option<CarouselDragTransition>,
    pub capture_command: Option<CaptureCommand>,
    pub log: PointerLogEntry,
}

impl PointerDispatch {
    fn ignored(
        phase: PointerLifecyclePhase,
        reason: PointerIgnoredReason,
        pointer_id: Option<u32>,
        x: Option<f64>,
    ) -> Self {
        let dispatch = Self {
            event: None,
            transition: None,
            capture_command: None,
            log: PointerLogEntry {
                phase,
                sequence: None,
                pointer_id,
                x,
                capture_command: None,
                outcome: PointerLogOutcome::Ignored(reason),
            },
        };
        tracing::debug!(
            target: "folio.drag",
            phase = ?phase,
            reason = ?reason,
            pointer_id = ?pointer_id,
            "pointer signal ignored"
        );
        dispatch
    }

    /// Effect of the forwarded transition, if any.
    #[must_use]
    pub fn effect(&self) -> Option<CarouselDragEffect> {
        self.transition.map(|transition| transition.effect)
    }
}

/// Pointer-capture adapter for carousel web hosts.
///
/// Emits events accepted by [`CarouselDragMachine`] and returns capture
/// commands that hosts wire to `setPointerCapture()` /
/// `releasePointerCapture()` (or apply directly via [`CaptureCommand::apply`]).
#[derive(Debug, Clone)]
pub struct CarouselPointerAdapter {
    machine: CarouselDragMachine,
    config: PointerCaptureConfig,
    active: Option<ActivePointer>,
    next_sequence: u64,
}

impl CarouselPointerAdapter {
    /// Construct an adapter from validated carousel parameters.
    pub fn new(
        params: &CarouselParams,
        config: PointerCaptureConfig,
    ) -> Result<Self, CarouselDragMachineError> {
        Ok(Self {
            machine: CarouselDragMachine::from_params(params)?,
            config,
            active: None,
            next_sequence: 1,
        })
    }

    /// Adapter configuration.
    #[must_use]
    pub const fn config(&self) -> PointerCaptureConfig {
        self.config
    }

    /// Active pointer id, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    /// Current drag machine state.
    #[must_use]
    pub const fn machine_state(&self) -> CarouselDragState {
        self.machine.state()
    }

    /// Underlying drag machine.
    #[must_use]
    pub const fn machine(&self) -> &CarouselDragMachine {
        &self.machine
    }

    /// Handle pointer-down on the carousel stage.
    pub fn pointer_down(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        x: f64,
        active_index: usize,
        item_count: usize,
    ) -> PointerDispatch {
        let phase = PointerLifecyclePhase::PointerDown;
        if pointer_id == 0 {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::InvalidPointerId,
                Some(pointer_id),
                Some(x),
            );
        }
        if button != self.config.activation_button {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ButtonNotAllowed,
                Some(pointer_id),
                Some(x),
            );
        }
        if self.active.is_some() {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ActivePointerAlreadyInProgress,
                Some(pointer_id),
                Some(x),
            );
        }

        let kind = CarouselInputEventKind::PointerDown {
            pointer_id,
            button,
            x,
            active_index,
            item_count,
        };
        let dispatch = self.forward(phase, Some(pointer_id), Some(x), kind, None);
        if dispatch.transition.is_some() {
            self.active = Some(ActivePointer {
                pointer_id,
                button,
                capture_state: CaptureState::None,
            });
        }
        dispatch
    }

    /// Handle pointer-move; requests capture when the gesture commits.
    pub fn pointer_move(&mut self, pointer_id: u32, x: f64) -> PointerDispatch {
        let phase = PointerLifecyclePhase::PointerMove;
        let Some(mut active) = self.active else {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                Some(x),
            );
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(x),
            );
        }

        let was_dragging = self.machine.state().is_dragging();
        let mut dispatch = self.forward(
            phase,
            Some(pointer_id),
            Some(x),
            CarouselInputEventKind::PointerMove { pointer_id, x },
            None,
        );
        if !was_dragging && self.machine.state().is_dragging() {
            let command = CaptureCommand::Acquire { pointer_id };
            dispatch.capture_command = Some(command);
            dispatch.log.capture_command = Some(command);
            active.capture_state = CaptureState::Requested;
            self.active = Some(active);
        }
        dispatch
    }

    /// Mark browser pointer capture as acquired.
    pub fn capture_acquired(&mut self, pointer_id: u32) -> PointerDispatch {
        let phase = PointerLifecyclePhase::CaptureAcquired;
        let Some(mut active) = self.active else {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                None,
            );
        }
        active.capture_state = CaptureState::Acquired;
        self.active = Some(active);
        PointerDispatch {
            event: None,
            transition: None,
            capture_command: None,
            log: PointerLogEntry {
                phase,
                sequence: None,
                pointer_id: Some(pointer_id),
                x: None,
                capture_command: None,
                outcome: PointerLogOutcome::CaptureStateUpdated,
            },
        }
    }

    /// Handle pointer-up: click or settle, releasing capture if requested.
    pub fn pointer_up(&mut self, pointer_id: u32, button: PointerButton) -> PointerDispatch {
        let phase = PointerLifecyclePhase::PointerUp;
        let Some(active) = self.active else {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                None,
            );
        }
        if active.button != button {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                None,
            );
        }

        let release = active
            .capture_state
            .needs_release()
            .then_some(CaptureCommand::Release { pointer_id });
        let dispatch = self.forward(
            phase,
            Some(pointer_id),
            None,
            CarouselInputEventKind::PointerUp { pointer_id, button },
            release,
        );
        if dispatch.transition.is_some() {
            self.active = None;
        }
        dispatch
    }

    /// Handle browser pointer-cancel.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> PointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::PointerCancel,
            pointer_id,
            CarouselCancelReason::PointerCancel,
            true,
        )
    }

    /// Handle window blur.
    pub fn blur(&mut self) -> PointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::Blur,
            None,
            CarouselCancelReason::Blur,
            true,
        )
    }

    /// Handle visibility-hidden interruptions.
    pub fn visibility_hidden(&mut self) -> PointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::VisibilityHidden,
            None,
            CarouselCancelReason::VisibilityHidden,
            true,
        )
    }

    /// Handle `lostpointercapture`; the browser already released capture.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> PointerDispatch {
        self.cancel_active(
            PointerLifecyclePhase::LostPointerCapture,
            Some(pointer_id),
            CarouselCancelReason::LostPointerCapture,
            false,
        )
    }

    fn cancel_active(
        &mut self,
        phase: PointerLifecyclePhase,
        pointer_id: Option<u32>,
        reason: CarouselCancelReason,
        release_capture: bool,
    ) -> PointerDispatch {
        let Some(active) = self.active else {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                pointer_id,
                None,
            );
        };
        if let Some(id) = pointer_id
            && id != active.pointer_id
        {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(id),
                None,
            );
        }

        let command = (release_capture && active.capture_state.needs_release()).then_some(
            CaptureCommand::Release {
                pointer_id: active.pointer_id,
            },
        );
        let dispatch = self.forward(
            phase,
            Some(active.pointer_id),
            None,
            CarouselInputEventKind::Cancel { reason },
            command,
        );
        if dispatch.transition.is_some() {
            self.active = None;
        }
        dispatch
    }

    fn forward(
        &mut self,
        phase: PointerLifecyclePhase,
        pointer_id: Option<u32>,
        x: Option<f64>,
        kind: CarouselInputEventKind,
        capture_command: Option<CaptureCommand>,
    ) -> PointerDispatch {
        let event = CarouselInputEvent::new(self.next_sequence(), kind);
        match self.machine.apply_event(&event) {
            Ok(transition) => PointerDispatch {
                event: Some(event),
                transition: Some(transition),
                capture_command,
                log: PointerLogEntry {
                    phase,
                    sequence: Some(event.sequence),
                    pointer_id,
                    x,
                    capture_command,
                    outcome: PointerLogOutcome::EventForwarded,
                },
            },
            Err(error) => {
                tracing::warn!(
                    target: "folio.drag",
                    phase = ?phase,
                    error = %error,
                    "drag machine rejected pointer event"
                );
                PointerDispatch::ignored(
                    phase,
                    PointerIgnoredReason::MachineRejectedEvent,
                    pointer_id,
                    x,
                )
            }
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
