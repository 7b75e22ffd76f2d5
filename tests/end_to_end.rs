//! Widget records in, host events out.

use helenos_canvas_events::native::{KEY_PRESS, KEY_RELEASE, POS_PRESS, POS_UPDATE, RawKbdEvent, RawPosEvent};
use helenos_canvas_events::{
    BridgeConfig, ButtonState, HostEvent, HostEventQueue, KbdEvent, Key, Keycode, Modifiers,
    PosEvent, channel,
};

#[test]
fn test_key_then_button_order() {
    let (producer, mut pump) = channel(BridgeConfig::default()).unwrap();
    pump.init_keymap();

    // Pointer first: keyboard is still drained ahead of it.
    producer.push_position(PosEvent::from(&RawPosEvent {
        pos_id: 0,
        kind: POS_PRESS,
        btn_num: 1,
        hpos: 0,
        vpos: 0,
    }));
    producer.push_keyboard(KbdEvent::from(&RawKbdEvent::new(
        KEY_PRESS,
        Keycode::Q.raw(),
        0,
        'q' as u32,
    )));

    let mut host = HostEventQueue::new();
    let report = pump.pump(&mut host);
    assert_eq!(report.posted, 2);

    match host.poll() {
        Some(HostEvent::Key { state, keysym }) => {
            assert_eq!(state, ButtonState::Pressed);
            assert_eq!(keysym.sym, Key::Q);
            assert_eq!(keysym.scancode, Keycode::Q.raw());
            assert_eq!(keysym.modifiers, Modifiers::NONE);
            assert_eq!(keysym.unicode, 0);
        }
        other => panic!("expected key event, got {:?}", other),
    }
    assert_eq!(
        host.poll(),
        Some(HostEvent::MouseButton { state: ButtonState::Pressed, button: 1 })
    );
    assert_eq!(host.poll(), None);
}

#[test]
fn test_repeated_position_suppressed_across_pumps() {
    let (producer, mut pump) = channel(BridgeConfig::default()).unwrap();
    pump.init_keymap();
    let mut host = HostEventQueue::new();

    let moved = |x, y| RawPosEvent { pos_id: 0, kind: POS_UPDATE, btn_num: 0, hpos: x, vpos: y };

    producer.push_position(PosEvent::from(&moved(5, 5)));
    pump.pump(&mut host);
    producer.push_position(PosEvent::from(&moved(5, 5)));
    producer.push_position(PosEvent::from(&moved(6, 5)));
    let report = pump.pump(&mut host);

    assert_eq!(report.posted, 1);
    assert_eq!(report.suppressed_moves, 1);
    assert_eq!(
        host.drain(),
        vec![HostEvent::MouseMotion { x: 5, y: 5 }, HostEvent::MouseMotion { x: 6, y: 5 }]
    );
}

#[test]
fn test_release_without_press_is_forwarded() {
    let (producer, mut pump) = channel(BridgeConfig::default()).unwrap();
    pump.init_keymap();

    producer.push_keyboard(KbdEvent::from(&RawKbdEvent::new(
        KEY_RELEASE,
        Keycode::Escape.raw(),
        0,
        0,
    )));

    let mut host = HostEventQueue::new();
    assert_eq!(pump.pump(&mut host).posted, 1);
    match host.poll() {
        Some(HostEvent::Key { state, keysym }) => {
            assert_eq!(state, ButtonState::Released);
            // Escape has no table entry.
            assert_eq!(keysym.sym, Key::Unknown);
        }
        other => panic!("expected key event, got {:?}", other),
    }
}

#[test]
fn test_full_ring_overflow_is_visible() {
    let (producer, mut pump) =
        channel(BridgeConfig { queue_len: 3, ..BridgeConfig::default() }).unwrap();
    pump.init_keymap();

    for btn in 1..=5 {
        producer.push_position(PosEvent::press(btn));
    }
    assert_eq!(producer.queue_stats().pointer.overflows, 2);

    let mut host = HostEventQueue::new();
    assert_eq!(pump.pump(&mut host).posted, 3);
    let buttons: Vec<u8> = host
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            HostEvent::MouseButton { button, .. } => Some(button),
            _ => None,
        })
        .collect();
    assert_eq!(buttons, vec![3, 4, 5]);
}
