#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use folio_core::PointerButton;
use folio_layout::CarouselParams;
use folio_web::pointer_capture::{CarouselPointerAdapter, PointerCaptureConfig};
use folio_web::ring::RingIndicator;
use std::hint::black_box;

fn bench_carousel_pointer_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/web_pointer/lifecycle");
    let params = CarouselParams::default();

    group.bench_function("down_ack_move_32_up", |b| {
        b.iter(|| {
            let mut adapter = CarouselPointerAdapter::new(&params, PointerCaptureConfig::default())
                .expect("default adapter config should be valid");

            let down = adapter.pointer_down(11, PointerButton::Primary, 600.0, 4, 12);
            black_box(down.log.sequence);

            for step in 0..32 {
                let dispatch = adapter.pointer_move(11, 600.0 - f64::from(step) * 6.0);
                if dispatch.capture_command.is_some() {
                    black_box(adapter.capture_acquired(11).log.phase);
                }
                black_box(dispatch.effect());
            }

            let up = adapter.pointer_up(11, PointerButton::Primary);
            black_box(up.capture_command);
        });
    });

    group.bench_function("down_move_120_blur", |b| {
        b.iter(|| {
            let mut adapter = CarouselPointerAdapter::new(&params, PointerCaptureConfig::default())
                .expect("default adapter config should be valid");

            adapter.pointer_down(23, PointerButton::Primary, 100.0, 0, 26);
            for step in 0..120 {
                let x = 100.0 + f64::from(step * 3) / 2.0;
                let dispatch = adapter.pointer_move(23, x);
                black_box(
                    dispatch
                        .transition
                        .as_ref()
                        .map(|transition| transition.sequence),
                );
            }

            let blur = adapter.blur();
            black_box(blur.capture_command);
        });
    });

    group.finish();
}

fn bench_ring_scrub(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/web_pointer/ring");

    group.bench_function("scrub_64", |b| {
        b.iter(|| {
            let mut ring = RingIndicator::new(26, 13);
            ring.pointer_down(5, 200.0);
            for step in 0..64 {
                let dispatch = ring.pointer_move(5, 200.0 + f64::from(step) * 2.5);
                black_box(dispatch.index);
            }
            ring.pointer_up();
            black_box(ring.active_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_carousel_pointer_lifecycle, bench_ring_scrub);
criterion_main!(benches);
