//! Property-based invariants for the scrapbook pointer lifecycle.
//!
//! 1. The adapter tracks a pointer exactly while the drag machine is active
//! 2. Capture is requested at most once per gesture, and released only after
//!    it was requested
//! 3. The active index never leaves the category
//! 4. Once a gesture ends, no drag delta remains on the stage

use folio_core::{Catalog, PointerButton};
use folio_layout::CarouselParams;
use folio_web::drag_machine::CarouselDragState;
use folio_web::pointer_capture::CaptureCommand;
use folio_web::scrapbook::{Scrapbook, ScrapbookConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Down { pointer_id: u32, x: f64 },
    Move { pointer_id: u32, x: f64 },
    Up { pointer_id: u32 },
    Cancel,
    Blur,
    LostCapture { pointer_id: u32 },
    Key(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..3, -400.0f64..1200.0).prop_map(|(pointer_id, x)| Op::Down { pointer_id, x }),
        (1u32..3, -400.0f64..1200.0).prop_map(|(pointer_id, x)| Op::Move { pointer_id, x }),
        (1u32..3, -400.0f64..1200.0).prop_map(|(pointer_id, x)| Op::Move { pointer_id, x }),
        (1u32..3).prop_map(|pointer_id| Op::Up { pointer_id }),
        Just(Op::Cancel),
        Just(Op::Blur),
        (1u32..3).prop_map(|pointer_id| Op::LostCapture { pointer_id }),
        any::<bool>().prop_map(Op::Key),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pointer_lifecycle_invariants(
        slug in prop_oneof![Just("brand"), Just("product"), Just("print")],
        ops in prop::collection::vec(op_strategy(), 1..64),
    ) {
        let mut book = Scrapbook::open(
            &Catalog::archive(),
            slug,
            CarouselParams::default(),
            ScrapbookConfig::default(),
        )
        .expect("archive category opens");

        let mut requested: Option<u32> = None;

        for op in ops {
            let dispatch = match op {
                Op::Down { pointer_id, x } => book.pointer_down(pointer_id, PointerButton::Primary, x),
                Op::Move { pointer_id, x } => book.pointer_move(pointer_id, x),
                Op::Up { pointer_id } => book.pointer_up(pointer_id, PointerButton::Primary),
                Op::Cancel => book.pointer_cancel(None),
                Op::Blur => book.blur(),
                Op::LostCapture { pointer_id } => book.lost_pointer_capture(pointer_id),
                Op::Key(forward) => {
                    if forward {
                        book.go_forward();
                    } else {
                        book.go_back();
                    }
                    continue;
                }
            };

            match dispatch.capture_command {
                Some(CaptureCommand::Acquire { pointer_id }) => {
                    prop_assert_eq!(requested, None, "capture requested twice");
                    requested = Some(pointer_id);
                }
                Some(CaptureCommand::Release { pointer_id }) => {
                    prop_assert_eq!(requested, Some(pointer_id), "release without request");
                }
                None => {}
            }

            let state = book.drag_state();
            prop_assert_eq!(
                book.active_pointer_id().is_some(),
                !matches!(state, CarouselDragState::Idle)
            );
            if matches!(state, CarouselDragState::Idle) {
                requested = None;
                prop_assert_eq!(book.drag_delta(), 0.0);
            }

            prop_assert!(book.active_index() < book.len());
            prop_assert!(book.projected_index() < book.len());
        }
    }
}
