//! Curator core: pure state machine and view-model helpers.
mod artwork;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use artwork::{Artwork, ArtworkId};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, RequestToken};
pub use update::update;
pub use view_model::{
    AppViewModel, ArtworkRowView, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS, TOTAL_RECORDS,
};
