use std::sync::Once;

use curator_core::{update, AppState, Artwork, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(curator_logging::initialize_for_tests);
}

fn artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {id}"),
        place_of_origin: "Unknown".to_string(),
        artist: "Unknown".to_string(),
        inscriptions: "N/A".to_string(),
        date_start: 0,
        date_end: 0,
    }
}

fn artworks(ids: std::ops::RangeInclusive<u64>) -> Vec<Artwork> {
    ids.map(artwork).collect()
}

#[test]
fn started_requests_the_first_page() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::Started);

    assert_eq!(effects, vec![Effect::FetchPage { page: 1, token: 1 }]);
    assert!(state.consume_dirty());
}

#[test]
fn page_change_records_the_cursor_and_fetches() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            token: 1,
            artworks: artworks(1..=12),
        },
    );

    let (state, effects) = update(
        state,
        Msg::PageChanged {
            first: 12,
            rows: 12,
        },
    );

    assert_eq!(effects, vec![Effect::FetchPage { page: 2, token: 2 }]);
    let view = state.view();
    assert_eq!(view.first, 12);
    assert_eq!(view.page, 2);
    // The old rows stay visible until the new page resolves.
    assert_eq!(view.rows.len(), 12);
}

#[test]
fn page_size_change_adjusts_page_count() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    assert_eq!(state.view().page_count, 10);

    let (state, effects) = update(state, Msg::PageChanged { first: 0, rows: 30 });

    assert_eq!(effects, vec![Effect::FetchPage { page: 1, token: 2 }]);
    assert_eq!(state.view().page_count, 4);
}

#[test]
fn accepted_load_replaces_the_page() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            token: 1,
            artworks: artworks(1..=12),
        },
    );
    assert_eq!(state.view().rows.len(), 12);

    let (state, _effects) = update(
        state,
        Msg::PageChanged {
            first: 12,
            rows: 12,
        },
    );
    let (mut state, effects) = update(
        state,
        Msg::PageLoaded {
            token: 2,
            artworks: artworks(13..=24),
        },
    );

    assert!(effects.is_empty());
    let ids: Vec<_> = state.view().rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, (13..=24).collect::<Vec<_>>());
    assert!(state.consume_dirty());
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    let (mut state, _effects) = update(
        state,
        Msg::PageChanged {
            first: 12,
            rows: 12,
        },
    );
    assert!(state.consume_dirty());
    let (state, _effects) = update(
        state,
        Msg::PageChanged {
            first: 24,
            rows: 12,
        },
    );

    // The page-2 fetch resolves after the page-3 fetch was issued.
    let (mut state, effects) = update(
        state,
        Msg::PageLoaded {
            token: 2,
            artworks: artworks(13..=24),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().rows.is_empty());
    state.consume_dirty();

    // The response for the latest request wins.
    let (mut state, _effects) = update(
        state,
        Msg::PageLoaded {
            token: 3,
            artworks: artworks(25..=36),
        },
    );
    let ids: Vec<_> = state.view().rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, (25..=36).collect::<Vec<_>>());
    assert!(state.consume_dirty());
}

#[test]
fn failed_load_empties_the_page() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            token: 1,
            artworks: artworks(1..=12),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::SelectionChanged {
            selected: artworks(1..=2),
        },
    );

    let (state, _effects) = update(
        state,
        Msg::PageChanged {
            first: 12,
            rows: 12,
        },
    );
    let (state, effects) = update(state, Msg::PageLoadFailed { token: 2 });

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.rows.is_empty());
    // Selections accumulated so far are untouched by the failure.
    assert_eq!(view.selected_count, 2);
    assert!(!view.select_all);
}

#[test]
fn stale_failure_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::Started);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            token: 1,
            artworks: artworks(1..=12),
        },
    );
    let (mut state, _effects) = update(
        state,
        Msg::PageChanged {
            first: 12,
            rows: 12,
        },
    );
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::PageLoadFailed { token: 1 });

    assert!(effects.is_empty());
    assert_eq!(state.view().rows.len(), 12);
    assert!(!state.consume_dirty());
}
