//! Property-based invariant tests for overlay placement and lifecycle.
//!
//! These verify the structural invariants that must hold for **any**
//! combination of anchor, overlay size, and viewport:
//!
//! 1. Placement containment: when the overlay fits inside the viewport minus
//!    margins, the resolved rect never crosses the margin band.
//! 2. Placement totality and determinism.
//! 3. Listener balance: after any event sequence, the active listener count
//!    is the full pair if open, empty otherwise.
//! 4. Close is idempotent.
//! 5. Escape closes from any alignment state.
//! 6. Cancelled timers never fire.

use plinth_core::event::{Event, KeyEvent, PointerEvent, TouchEvent};
use plinth_core::geometry::{Point, Rect, Size, Viewport};
use plinth_overlay::{
    Anchor, DismissalListeners, HorizontalAlign, OverlayConfig, OverlayController, Placement,
    PlacementConfig, TriggerKind, VerticalSide, compute_placement, resolve,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn anchor_strategy() -> impl Strategy<Value = Anchor> {
    prop_oneof![
        (0.0f32..=2000.0, 0.0f32..=2000.0).prop_map(|(x, y)| Anchor::Point(Point::new(x, y))),
        (0.0f32..=2000.0, 0.0f32..=2000.0, 1.0f32..=200.0, 1.0f32..=200.0)
            .prop_map(|(x, y, w, h)| Anchor::Rect(Rect::new(x, y, w, h))),
    ]
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(HorizontalAlign::Left),
        Just(HorizontalAlign::Right),
        Just(HorizontalAlign::Center),
    ]
    .prop_flat_map(|h| {
        prop_oneof![Just(VerticalSide::Bottom), Just(VerticalSide::Top)]
            .prop_map(move |v| Placement::new(h, v))
    })
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (200.0f32..=3000.0, 200.0f32..=3000.0).prop_map(|(w, h)| Viewport::new(w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Containment: a fitting overlay stays inside the margin band
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolved_rect_stays_within_margins(
        anchor in anchor_strategy(),
        preferred in placement_strategy(),
        viewport in viewport_strategy(),
        w_frac in 0.01f32..=0.9,
        h_frac in 0.01f32..=0.9,
    ) {
        let margin = 10.0;
        let config = PlacementConfig::default();
        // Scale the overlay so it is guaranteed to fit: size <= extent - 2m.
        let overlay = Size::new(
            (viewport.width - 2.0 * margin) * w_frac,
            (viewport.height - 2.0 * margin) * h_frac,
        );

        let resolved = resolve(anchor, preferred, overlay, viewport, &config);
        let r = resolved.rect;

        prop_assert!(r.x >= margin - 1e-3, "left edge {} under margin", r.x);
        prop_assert!(r.y >= margin - 1e-3, "top edge {} under margin", r.y);
        prop_assert!(
            r.right() <= viewport.width - margin + 1e-3,
            "right edge {} beyond {}",
            r.right(),
            viewport.width - margin
        );
        prop_assert!(
            r.bottom() <= viewport.height - margin + 1e-3,
            "bottom edge {} beyond {}",
            r.bottom(),
            viewport.height - margin
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Totality and determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placement_is_total_and_deterministic(
        anchor in anchor_strategy(),
        preferred in placement_strategy(),
        viewport in viewport_strategy(),
        w in 0.0f32..=5000.0,
        h in 0.0f32..=5000.0,
    ) {
        let config = PlacementConfig::default();
        let overlay = Size::new(w, h);

        // Must not panic even for overlays larger than the viewport.
        let p1 = compute_placement(anchor, preferred, overlay, viewport, &config);
        let p2 = compute_placement(anchor, preferred, overlay, viewport, &config);
        prop_assert_eq!(p1, p2);

        let r1 = resolve(anchor, preferred, overlay, viewport, &config);
        let r2 = resolve(anchor, preferred, overlay, viewport, &config);
        prop_assert_eq!(r1.rect, r2.rect);
        // Resolved rect is never off the near edges.
        prop_assert!(r1.rect.x >= 0.0);
        prop_assert!(r1.rect.y >= 0.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Listener balance over arbitrary event sequences
// ═════════════════════════════════════════════════════════════════════════

fn event_strategy() -> impl Strategy<Value = Event> {
    let pos = (0.0f32..=1000.0, 0.0f32..=1000.0).prop_map(|(x, y)| Point::new(x, y));
    prop_oneof![
        pos.clone().prop_map(|p| Event::PointerDown(PointerEvent::primary(p))),
        pos.clone().prop_map(|p| Event::ContextClick(PointerEvent::primary(p))),
        pos.clone().prop_map(|p| Event::PointerEnter(PointerEvent::primary(p))),
        pos.clone().prop_map(|p| Event::PointerLeave(PointerEvent::primary(p))),
        pos.clone().prop_map(|p| Event::TouchStart(TouchEvent { position: p })),
        pos.clone().prop_map(|p| Event::TouchMove(TouchEvent { position: p })),
        pos.prop_map(|p| Event::TouchEnd(TouchEvent { position: p })),
        Just(Event::Key(KeyEvent::escape())),
    ]
}

fn trigger_kind_strategy() -> impl Strategy<Value = TriggerKind> {
    prop_oneof![
        Just(TriggerKind::ClickToggle),
        (0u64..=1000).prop_map(|ms| TriggerKind::ContextClick { long_press_ms: ms }),
        (0u64..=1000).prop_map(|ms| TriggerKind::Hover { open_delay_ms: ms }),
    ]
}

proptest! {
    #[test]
    fn listeners_balance_after_any_sequence(
        kind in trigger_kind_strategy(),
        events in proptest::collection::vec(event_strategy(), 0..40),
    ) {
        let mut controller = OverlayController::new(OverlayConfig::new(kind));
        controller.set_trigger_bounds(Rect::new(100.0, 100.0, 50.0, 50.0));

        let mut now = 0u64;
        for event in &events {
            controller.handle_event(event, now);
            now += 100;
            controller.poll(now);

            let expected = if controller.is_open() {
                DismissalListeners::all()
            } else {
                DismissalListeners::empty()
            };
            prop_assert_eq!(controller.active_listeners(), expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Close idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_close_is_idempotent(kind in trigger_kind_strategy(), closes in 1usize..5) {
        let mut controller = OverlayController::new(OverlayConfig::new(kind));
        controller.set_trigger_bounds(Rect::new(0.0, 0.0, 50.0, 50.0));
        controller.open(Anchor::Point(Point::new(10.0, 10.0)));
        controller.close();
        let snapshot = (controller.is_open(), controller.active_listeners());
        for _ in 0..closes {
            controller.close();
            prop_assert_eq!((controller.is_open(), controller.active_listeners()), snapshot);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Escape closes from any alignment state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn escape_closes_any_open_overlay(
        kind in trigger_kind_strategy(),
        preferred in placement_strategy(),
        measured in any::<bool>(),
    ) {
        let mut controller =
            OverlayController::new(OverlayConfig::new(kind).preferred(preferred));
        controller.set_trigger_bounds(Rect::new(0.0, 0.0, 50.0, 50.0));
        controller.open(Anchor::Point(Point::new(700.0, 600.0)));
        if measured {
            controller.measure(Size::new(240.0, 200.0), Viewport::new(800.0, 700.0));
        }

        controller.handle_event(&Event::Key(KeyEvent::escape()), 0);
        prop_assert!(!controller.is_open());
        prop_assert!(controller.active_listeners().is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Cancelled timers never fire
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cancelled_long_press_never_opens(
        long_press_ms in 1u64..=2000,
        cancel_after in 0u64..=2000,
    ) {
        prop_assume!(cancel_after < long_press_ms);
        let mut controller = OverlayController::new(OverlayConfig::new(
            TriggerKind::ContextClick { long_press_ms },
        ));
        controller.set_trigger_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));

        let touch = TouchEvent { position: Point::new(50.0, 50.0) };
        controller.handle_event(&Event::TouchStart(touch), 0);
        controller.handle_event(&Event::TouchMove(touch), cancel_after);

        controller.poll(long_press_ms.saturating_mul(4));
        prop_assert!(!controller.is_open());
    }

    #[test]
    fn cancelled_hover_delay_never_opens(
        open_delay_ms in 1u64..=2000,
        leave_after in 0u64..=2000,
    ) {
        prop_assume!(leave_after < open_delay_ms);
        let mut controller =
            OverlayController::new(OverlayConfig::new(TriggerKind::Hover { open_delay_ms }));
        controller.set_trigger_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));

        let p = PointerEvent::primary(Point::new(50.0, 50.0));
        controller.handle_event(&Event::PointerEnter(p), 0);
        controller.handle_event(&Event::PointerLeave(p), leave_after);

        controller.poll(open_delay_ms.saturating_mul(4));
        prop_assert!(!controller.is_open());
    }
}
