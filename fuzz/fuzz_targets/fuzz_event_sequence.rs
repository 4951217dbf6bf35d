#![no_main]

use heartboard::config::{DismissScope, DoubleTapScope, ScreenSettings, Variant};
use heartboard::{HeartController, ViewUpdate};
use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};

const HEARTS: usize = 7;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, events)) = data.split_first() else {
        return;
    };

    let variant = if flags & 1 == 0 { Variant::Star } else { Variant::AutoDismiss };
    let settings = ScreenSettings {
        item_count: HEARTS,
        double_tap_scope: if flags & 2 == 0 { DoubleTapScope::PerItem } else { DoubleTapScope::Shared },
        dismiss_scope: if flags & 4 == 0 { DismissScope::PerItem } else { DismissScope::Global },
        ..ScreenSettings::for_variant(variant)
    };

    let mut now = Instant::now();
    let Ok(mut controller) = HeartController::new(settings, Vec::<ViewUpdate>::new()) else {
        return;
    };
    controller.mark_ready(now);

    // Each pair of bytes is one event: opcode then argument
    for pair in events.chunks_exact(2) {
        let index = usize::from(pair[1] % 10);
        match pair[0] % 4 {
            0 => controller.tap(index, now),
            1 => controller.double_tap(index, now),
            2 => controller.tooltip_tap(index, now),
            _ => {
                now += Duration::from_millis(u64::from(pair[1]) * 8);
                controller.advance(now);
            }
        }

        assert!(controller.snapshot(now).visible_tooltips() <= 1);
        if let Some(active) = controller.active_tooltip() {
            assert!(controller.is_filled(active));
        }
        for heart in 0..HEARTS {
            assert!(!controller.is_starred(heart) || controller.is_filled(heart));
        }
    }

    controller.shutdown();
    assert_eq!(controller.pending_timers(), 0);
});
