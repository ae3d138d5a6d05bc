use super::*;

// =============================================================
// ChatState defaults and seed
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn seeded_transcript_alternates_visitor_and_support() {
    let state = ChatState::seeded();
    assert!(!state.messages.is_empty());
    assert!(!state.messages[0].from_support);
    assert!(state.messages.last().is_some_and(|m| m.from_support));
    for msg in &state.messages {
        assert!(!msg.body.is_empty());
        if msg.from_support {
            assert_eq!(msg.author, "Support");
        } else {
            assert_eq!(msg.author, "You");
        }
    }
}

// =============================================================
// push_visitor
// =============================================================

#[test]
fn push_visitor_appends_at_the_end() {
    let mut state = ChatState::seeded();
    let before = state.messages.len();

    state.push_visitor("Is there parking at the venue?".to_owned());

    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().unwrap();
    assert_eq!(last.author, "You");
    assert_eq!(last.body, "Is there parking at the venue?");
    assert!(!last.from_support);
}

#[test]
fn push_visitor_keeps_earlier_messages_in_order() {
    let mut state = ChatState::default();
    state.push_visitor("first".to_owned());
    state.push_visitor("second".to_owned());

    assert_eq!(state.messages[0].body, "first");
    assert_eq!(state.messages[1].body, "second");
}
