use bytes::Bytes;

use voxlate::domain::{TranscriptionResult, Utterance};

#[test]
fn given_explicit_hint_when_forwarding_then_hint_is_passed_through() {
    let utterance = Utterance::new(Bytes::from_static(b"audio"), Some("it".to_string()));
    assert_eq!(utterance.forwarded_hint(), Some("it"));
}

#[test]
fn given_auto_sentinel_hint_when_forwarding_then_hint_is_suppressed() {
    for hint in ["auto", "AUTO", " Auto "] {
        let utterance = Utterance::new(Bytes::from_static(b"audio"), Some(hint.to_string()));
        assert_eq!(utterance.forwarded_hint(), None, "hint {hint:?} leaked");
    }
}

#[test]
fn given_missing_or_blank_hint_when_forwarding_then_nothing_is_passed() {
    let utterance = Utterance::new(Bytes::from_static(b"audio"), None);
    assert_eq!(utterance.forwarded_hint(), None);

    let utterance = Utterance::new(Bytes::from_static(b"audio"), Some("  ".to_string()));
    assert_eq!(utterance.forwarded_hint(), None);
}

#[test]
fn given_two_utterances_when_created_then_ids_differ() {
    let a = Utterance::new(Bytes::from_static(b"a"), None);
    let b = Utterance::new(Bytes::from_static(b"b"), None);
    assert_ne!(a.id, b.id);
}

#[test]
fn given_whitespace_only_recognizer_output_when_wrapping_then_empty() {
    assert_eq!(TranscriptionResult::from_raw(""), TranscriptionResult::Empty);
    assert_eq!(
        TranscriptionResult::from_raw("   \n\t"),
        TranscriptionResult::Empty
    );
}

#[test]
fn given_real_text_when_wrapping_then_trimmed_text() {
    assert_eq!(
        TranscriptionResult::from_raw("  hello  "),
        TranscriptionResult::Text("hello".to_string())
    );
}
