/// Numeric catalog identifier of an artwork.
pub type ArtworkId = u64;

/// One artwork row as shown in the table. Display fields already carry
/// their placeholder fallbacks; a value is never absent here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist: String,
    pub inscriptions: String,
    pub date_start: i32,
    pub date_end: i32,
}
