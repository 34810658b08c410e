use std::sync::{mpsc, Arc};
use std::thread;

use curator_logging::curator_warn;

use crate::fetch::{ArtworkFetcher, FetchSettings, ReqwestFetcher};
use crate::{EngineEvent, RequestToken};

enum EngineCommand {
    FetchPage { page: usize, token: RequestToken },
}

/// Handle to the fetch worker. Commands go in over a channel; completion
/// events come back and are drained with `try_recv` from the shell loop.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, page: usize, token: RequestToken) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { page, token });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn ArtworkFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { page, token } => {
            let result = fetcher.fetch_page(page).await;
            if let Err(err) = &result {
                curator_warn!("Fetch for page {} failed: {}", page, err);
            }
            let _ = event_tx.send(EngineEvent::PageFetched {
                token,
                page,
                result,
            });
        }
    }
}
