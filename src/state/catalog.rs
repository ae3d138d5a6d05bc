#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A single entry in the static event catalog. Labels are pre-rendered;
/// nothing here is fetched, parsed, or formatted at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventSummary {
    pub title: &'static str,
    pub venue: &'static str,
    pub date_label: &'static str,
    pub price_label: &'static str,
}

/// Sample catalog, soonest first.
pub const SAMPLE_EVENTS: &[EventSummary] = &[
    EventSummary {
        title: "Aurora Nights Festival",
        venue: "Riverside Park",
        date_label: "Sat, Sep 12",
        price_label: "from $45",
    },
    EventSummary {
        title: "City Philharmonic: Autumn Gala",
        venue: "Grand Concert Hall",
        date_label: "Fri, Sep 25",
        price_label: "from $30",
    },
    EventSummary {
        title: "The Paper Lanterns (acoustic)",
        venue: "Old Mill Club",
        date_label: "Thu, Oct 1",
        price_label: "from $18",
    },
    EventSummary {
        title: "Stand-up: Late Shift",
        venue: "Basement Stage",
        date_label: "Sat, Oct 10",
        price_label: "from $15",
    },
    EventSummary {
        title: "Hamlet, reimagined",
        venue: "National Theatre, Studio B",
        date_label: "Wed, Oct 21",
        price_label: "from $25",
    },
    EventSummary {
        title: "Electronic Avenue: Warehouse Edition",
        venue: "Dockside Warehouse 4",
        date_label: "Sat, Oct 31",
        price_label: "from $38",
    },
    EventSummary {
        title: "Winter Jazz Weekender",
        venue: "Harbor Pavilion",
        date_label: "Fri, Nov 13",
        price_label: "from $50",
    },
    EventSummary {
        title: "Candlelight Strings: Film Scores",
        venue: "St. Anne's Hall",
        date_label: "Sun, Nov 29",
        price_label: "from $22",
    },
];

/// Most events the home page surfaces in its featured section.
pub const FEATURED_LIMIT: usize = 6;

/// Featured subset for the home page: the soonest [`FEATURED_LIMIT`]
/// entries of the catalog.
pub fn featured_events() -> &'static [EventSummary] {
    let take = SAMPLE_EVENTS.len().min(FEATURED_LIMIT);
    &SAMPLE_EVENTS[..take]
}
