#![allow(clippy::unwrap_used)]
//! Benchmarks for the heart controller hot paths

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use heartboard::config::{ScreenSettings, Variant};
use heartboard::{HeartController, ViewUpdate};
use std::hint::black_box;
use std::time::{Duration, Instant};

const HEARTS: usize = 64;

fn ready_controller(variant: Variant) -> (HeartController<Vec<ViewUpdate>>, Instant) {
    let settings = ScreenSettings {
        item_count: HEARTS,
        ..ScreenSettings::for_variant(variant)
    };
    let now = Instant::now();
    let mut controller = HeartController::new(settings, Vec::with_capacity(4096)).unwrap();
    controller.mark_ready(now);
    controller.sink_mut().clear();
    (controller, now)
}

fn bench_star_taps(c: &mut Criterion) {
    c.bench_function("star_tap_every_heart", |b| {
        b.iter_batched(
            || ready_controller(Variant::Star),
            |(mut controller, now)| {
                for index in 0..HEARTS {
                    controller.tap(black_box(index), now);
                    controller.tooltip_tap(black_box(index), now);
                }
                controller
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_auto_dismiss_timers(c: &mut Criterion) {
    c.bench_function("auto_dismiss_fill_and_expire", |b| {
        b.iter_batched(
            || ready_controller(Variant::AutoDismiss),
            |(mut controller, now)| {
                for index in 0..HEARTS {
                    controller.tap(black_box(index), now + Duration::from_millis(index as u64));
                }
                controller.advance(now + Duration::from_secs(2));
                controller
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_animation_frames(c: &mut Criterion) {
    let (mut controller, now) = ready_controller(Variant::AutoDismiss);
    for index in 0..HEARTS {
        controller.tap(index, now);
    }

    c.bench_function("advance_frame_all_animating", |b| {
        b.iter(|| {
            controller.sink_mut().clear();
            controller.advance(black_box(now + Duration::from_millis(100)));
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let (controller, now) = ready_controller(Variant::Star);

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(controller.snapshot(black_box(now))));
    });
}

criterion_group!(
    benches,
    bench_star_taps,
    bench_auto_dismiss_timers,
    bench_animation_frames,
    bench_snapshot
);
criterion_main!(benches);
