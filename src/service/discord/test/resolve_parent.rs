use super::*;

/// Tests resolving a parent that exists.
///
/// Expected: Some with the matching category
#[test]
fn resolves_known_category() {
    let categories = vec![category(1, "Main", 0), category(2, "Other", 1)];
    let chat = channel(10, "chat", ChannelKind::Text, Some(2), 0);

    let parent = resolve_parent(&chat, &categories);

    assert_eq!(parent.map(|p| p.channel_id), Some(2));
}

/// Tests resolving a parent reference with no matching category.
///
/// The reference is non-null but unknown; resolution fails open.
///
/// Expected: None
#[test]
fn unknown_category_resolves_to_none() {
    let categories = vec![category(1, "Main", 0)];
    let orphan = channel(10, "orphan", ChannelKind::Text, Some(42), 0);

    assert!(resolve_parent(&orphan, &categories).is_none());
}

/// Tests resolving a channel without a parent reference.
///
/// Expected: None
#[test]
fn missing_reference_resolves_to_none() {
    let categories = vec![category(1, "Main", 0)];
    let top = channel(10, "top", ChannelKind::Voice, None, 0);

    assert!(resolve_parent(&top, &categories).is_none());
}
