//! End-to-end scenarios: split server-side, serialize, reveal client-side.

use readmore_core::{
    BlockPayload, DisplayMode, RevealController, RevealEffect, Settings, Splitter, TriggerKind,
};

fn text_of(words: usize) -> String {
    (0..words).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn single_mode_full_cycle() {
    let settings = Settings {
        word_threshold: 100,
        display_mode: DisplayMode::Single,
        ..Settings::default()
    };

    let block = Splitter::new(&settings).split("post-1", &text_of(250)).unwrap();
    assert_eq!(block.visible.len(), 100);
    assert_eq!(block.visible[0], "word0");
    assert_eq!(block.visible[99], "word99");
    assert_eq!(block.segments.len(), 1);
    assert_eq!(block.segments[0].tokens.len(), 150);
    assert_eq!(block.trigger.as_ref().map(|t| t.kind), Some(TriggerKind::RevealAll));

    let mut controller = RevealController::new(block, &settings);
    match controller.activate() {
        RevealEffect::Reveal {
            segment,
            remove_trigger,
            ..
        } => {
            assert_eq!(segment, 1);
            assert!(remove_trigger);
        }
        RevealEffect::Noop => panic!("expected the remainder to be revealed"),
    }
    assert!(controller.is_terminal());
    assert!(controller.block().segments.iter().all(|s| !s.is_hidden()));
}

#[test]
fn progressive_mode_full_cycle() {
    let settings = Settings {
        word_threshold: 100,
        display_mode: DisplayMode::Progressive,
        segment_size: 100,
        ..Settings::default()
    };

    let block = Splitter::new(&settings).split("post-2", &text_of(350)).unwrap();
    let sizes: Vec<usize> = block.segments.iter().map(|s| s.tokens.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    {
        let trigger = block.trigger.as_ref().unwrap();
        assert_eq!(trigger.current_segment, 0);
        assert_eq!(trigger.total_segments, 3);
    }

    let mut controller = RevealController::new(block, &settings);
    let mut revealed = Vec::new();
    for _ in 0..3 {
        match controller.activate() {
            RevealEffect::Reveal { segment, .. } => revealed.push(segment),
            RevealEffect::Noop => panic!("reveal ended early"),
        }
    }
    assert_eq!(revealed, vec![1, 2, 3]);
    assert!(controller.is_terminal());
    assert_eq!(controller.activate(), RevealEffect::Noop);
}

#[test]
fn payload_reconstruction_preserves_behavior() {
    let settings = Settings {
        word_threshold: 10,
        display_mode: DisplayMode::Progressive,
        segment_size: 5,
        ..Settings::default()
    };
    let block = Splitter::new(&settings).split("post-3", &text_of(30)).unwrap();

    // Drive the original controller one step
    let mut original = RevealController::new(block.clone(), &settings);
    original.activate();

    // Serialize mid-flight state and rebuild a controller from it
    let json = BlockPayload::from_block(original.block()).to_json().unwrap();
    let payload = BlockPayload::from_json(&json).unwrap();
    let mut rebuilt = RevealController::from_payload(&payload, &settings).unwrap();

    // Both controllers see identical remaining behavior
    loop {
        let a = original.activate();
        let b = rebuilt.activate();
        assert_eq!(a, b);
        if a == RevealEffect::Noop {
            break;
        }
    }
    assert_eq!(original.block(), rebuilt.block());
}
