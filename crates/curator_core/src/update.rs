use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let token = state.next_token();
            state.mark_dirty();
            vec![Effect::FetchPage {
                page: state.current_page(),
                token,
            }]
        }
        Msg::PageChanged { first, rows } => {
            state.set_page_cursor(first, rows);
            let token = state.next_token();
            state.mark_dirty();
            vec![Effect::FetchPage {
                page: state.current_page(),
                token,
            }]
        }
        Msg::PageLoaded { token, artworks } => {
            // Only the response to the latest request may replace the page;
            // anything else lost the race to a newer navigation.
            if state.is_stale(token) {
                return (state, Vec::new());
            }
            state.replace_artworks(artworks);
            if state.select_all() {
                state.merge_page_into_selection();
            }
            state.recompute_select_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::PageLoadFailed { token } => {
            if state.is_stale(token) {
                return (state, Vec::new());
            }
            // Failures were already logged at the fetch boundary; the page
            // just renders empty.
            state.clear_artworks();
            state.recompute_select_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectionChanged { selected } => {
            state.replace_selection(selected);
            state.recompute_select_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectAllToggled { checked } => {
            if checked {
                state.merge_page_into_selection();
            } else {
                // Unchecking drops every accumulated selection, not just the
                // current page's rows.
                state.clear_selection();
            }
            state.recompute_select_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::CustomCountChanged(count) => {
            state.set_custom_rows(count);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CustomCountSubmitted => {
            // Overwrites the selection with the first N rows of this page;
            // prior selections on other pages do not survive.
            state.select_first(state.custom_rows());
            state.recompute_select_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
