use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, ArtworkRowView, DEFAULT_ROWS_PER_PAGE, TOTAL_RECORDS};
use crate::{Artwork, ArtworkId};

/// Identifies one fetch request. Strictly increasing; only the response
/// carrying the latest token may touch the page rows.
pub type RequestToken = u64;

/// Complete table-view state. Mutation happens only through `update`;
/// the shell reads it via `view()` and the row accessors.
///
/// Invariant: `select_all` is true exactly when the current page is
/// non-empty and every row id on it is present in `selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    artworks: Vec<Artwork>,
    first: usize,
    rows_per_page: usize,
    selected: BTreeMap<ArtworkId, Artwork>,
    select_all: bool,
    custom_rows: usize,
    latest_token: RequestToken,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            artworks: Vec::new(),
            first: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            selected: BTreeMap::new(),
            select_all: false,
            custom_rows: DEFAULT_ROWS_PER_PAGE,
            latest_token: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .artworks
            .iter()
            .map(|artwork| ArtworkRowView {
                id: artwork.id,
                title: artwork.title.clone(),
                place_of_origin: artwork.place_of_origin.clone(),
                artist: artwork.artist.clone(),
                inscriptions: artwork.inscriptions.clone(),
                date_start: artwork.date_start,
                date_end: artwork.date_end,
                selected: self.selected.contains_key(&artwork.id),
            })
            .collect();

        AppViewModel {
            rows,
            first: self.first,
            rows_per_page: self.rows_per_page,
            page: self.current_page(),
            page_count: TOTAL_RECORDS.div_ceil(self.rows_per_page),
            total_records: TOTAL_RECORDS,
            selected_count: self.selected.len(),
            select_all: self.select_all,
            custom_rows: self.custom_rows,
            dirty: self.dirty,
        }
    }

    /// Rows of the current page, in table order.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// The accumulated selection across pages, in ascending id order.
    pub fn selected_artworks(&self) -> Vec<Artwork> {
        self.selected.values().cloned().collect()
    }

    /// Returns the dirty bit and clears it, so the shell can coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// 1-based page number derived from the row offset.
    pub fn current_page(&self) -> usize {
        self.first / self.rows_per_page + 1
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn next_token(&mut self) -> RequestToken {
        self.latest_token += 1;
        self.latest_token
    }

    pub(crate) fn is_stale(&self, token: RequestToken) -> bool {
        token != self.latest_token
    }

    pub(crate) fn set_page_cursor(&mut self, first: usize, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.first = first.min(TOTAL_RECORDS.saturating_sub(1));
    }

    pub(crate) fn replace_artworks(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
    }

    pub(crate) fn clear_artworks(&mut self) {
        self.artworks.clear();
    }

    pub(crate) fn select_all(&self) -> bool {
        self.select_all
    }

    pub(crate) fn custom_rows(&self) -> usize {
        self.custom_rows
    }

    pub(crate) fn set_custom_rows(&mut self, count: usize) {
        self.custom_rows = count;
    }

    /// Adds every current-page row not already selected. Ids already in
    /// the selection keep their stored rows.
    pub(crate) fn merge_page_into_selection(&mut self) {
        for artwork in &self.artworks {
            self.selected
                .entry(artwork.id)
                .or_insert_with(|| artwork.clone());
        }
    }

    /// Replaces the whole selection; duplicate ids in the input collapse
    /// to the last occurrence.
    pub(crate) fn replace_selection(&mut self, rows: Vec<Artwork>) {
        self.selected = rows
            .into_iter()
            .map(|artwork| (artwork.id, artwork))
            .collect();
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Replaces the selection with the first `count` rows of the current
    /// page, clamped to the page length.
    pub(crate) fn select_first(&mut self, count: usize) {
        let count = count.min(self.artworks.len());
        let slice = self.artworks[..count].to_vec();
        self.replace_selection(slice);
    }

    /// Re-derives the select-all flag from page coverage. An empty page
    /// never counts as covered.
    pub(crate) fn recompute_select_all(&mut self) {
        self.select_all = !self.artworks.is_empty()
            && self
                .artworks
                .iter()
                .all(|artwork| self.selected.contains_key(&artwork.id));
    }
}
