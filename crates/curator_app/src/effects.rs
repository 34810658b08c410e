use curator_core::{Artwork, Effect, Msg};
use curator_engine::{ArtworkRecord, EngineEvent, EngineHandle, FetchSettings};
use curator_logging::{curator_debug, curator_info};

/// Executes core effects against the fetch engine and translates engine
/// completions back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { page, token } => {
                    curator_info!("FetchPage page={} token={}", page, token);
                    self.engine.fetch_page(page, token);
                }
            }
        }
    }

    /// Drains at most one engine completion into a core message. The fetch
    /// failure itself was already logged inside the engine.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::PageFetched {
                token,
                page,
                result,
            } => match result {
                Ok(records) => {
                    curator_debug!("Page {} resolved with {} records", page, records.len());
                    Msg::PageLoaded {
                        token,
                        artworks: records.into_iter().map(map_record).collect(),
                    }
                }
                Err(_) => Msg::PageLoadFailed { token },
            },
        })
    }
}

fn map_record(record: ArtworkRecord) -> Artwork {
    Artwork {
        id: record.id,
        title: record.title,
        place_of_origin: record.place_of_origin,
        artist: record.artist,
        inscriptions: record.inscriptions,
        date_start: record.date_start,
        date_end: record.date_end,
    }
}
