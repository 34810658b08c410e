use crate::{Artwork, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Shell finished setup; kicks off the fetch for the first page.
    Started,
    /// Paginator moved to a new row offset and/or page size.
    PageChanged { first: usize, rows: usize },
    /// A page fetch resolved with decoded rows.
    PageLoaded {
        token: RequestToken,
        artworks: Vec<Artwork>,
    },
    /// A page fetch failed at the transport or decode boundary.
    PageLoadFailed { token: RequestToken },
    /// User changed the checked rows; carries the full replacement set.
    SelectionChanged { selected: Vec<Artwork> },
    /// Header select-all checkbox toggled.
    SelectAllToggled { checked: bool },
    /// User edited the select-N row-count input.
    CustomCountChanged(usize),
    /// User submitted the select-N row-count input.
    CustomCountSubmitted,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
