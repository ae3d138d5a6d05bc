use super::*;

// =============================================================
// Catalog data sanity
// =============================================================

#[test]
fn sample_catalog_is_non_empty_with_complete_labels() {
    assert!(!SAMPLE_EVENTS.is_empty());
    for event in SAMPLE_EVENTS {
        assert!(!event.title.is_empty());
        assert!(!event.venue.is_empty());
        assert!(!event.date_label.is_empty());
        assert!(!event.price_label.is_empty());
    }
}

#[test]
fn sample_catalog_titles_are_unique() {
    for (i, a) in SAMPLE_EVENTS.iter().enumerate() {
        for b in &SAMPLE_EVENTS[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

// =============================================================
// Featured subset
// =============================================================

#[test]
fn featured_events_is_a_capped_prefix_of_the_catalog() {
    let featured = featured_events();
    assert!(featured.len() <= FEATURED_LIMIT);
    assert!(featured.len() <= SAMPLE_EVENTS.len());
    assert_eq!(featured, &SAMPLE_EVENTS[..featured.len()]);
}

#[test]
fn featured_events_is_non_empty() {
    assert!(!featured_events().is_empty());
}
