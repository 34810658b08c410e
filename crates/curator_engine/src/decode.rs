use serde::Deserialize;

use crate::ArtworkRecord;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed catalog payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Envelope the catalog wraps every listing in. Only `data` is consumed;
/// the reported pagination block is ignored on purpose.
#[derive(Debug, Deserialize)]
struct CatalogPage {
    data: Vec<ArtworkDto>,
}

#[derive(Debug, Deserialize)]
struct ArtworkDto {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    place_of_origin: Option<String>,
    #[serde(default)]
    artist_display: Option<String>,
    #[serde(default)]
    inscriptions: Option<String>,
    #[serde(default)]
    date_start: Option<i32>,
    #[serde(default)]
    date_end: Option<i32>,
}

impl ArtworkDto {
    fn into_record(self) -> ArtworkRecord {
        ArtworkRecord {
            id: self.id,
            title: self.title.unwrap_or_else(|| "N/A".to_string()),
            place_of_origin: self.place_of_origin.unwrap_or_else(|| "Unknown".to_string()),
            artist: self.artist_display.unwrap_or_else(|| "Unknown".to_string()),
            inscriptions: self.inscriptions.unwrap_or_else(|| "N/A".to_string()),
            date_start: self.date_start.unwrap_or(0),
            date_end: self.date_end.unwrap_or(0),
        }
    }
}

/// Decode one catalog page. Absent or null display fields fall back to
/// placeholders; a record without a numeric id fails the whole payload.
pub fn decode_artworks_page(bytes: &[u8]) -> Result<Vec<ArtworkRecord>, DecodeError> {
    let page: CatalogPage = serde_json::from_slice(bytes)?;
    Ok(page.data.into_iter().map(ArtworkDto::into_record).collect())
}
