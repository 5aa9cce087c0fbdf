use reqwest::Client;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::app::Activation;
use crate::error::LoadError;
use crate::feed;
use crate::model::NewsItem;

#[derive(Debug)]
pub struct LoadOutcome {
    pub activation: Activation,
    pub result: Result<Vec<NewsItem>, LoadError>,
}

/// Runs news loads in the background, at most one at a time.
pub struct Loader {
    client: Client,
    url: String,
    tx: mpsc::Sender<LoadOutcome>,
    pending: Option<JoinHandle<()>>,
}

impl Loader {
    pub fn new(client: Client, url: String, tx: mpsc::Sender<LoadOutcome>) -> Self {
        Self {
            client,
            url,
            tx,
            pending: None,
        }
    }

    pub fn start(&mut self, activation: Activation) {
        self.cancel();

        let client = self.client.clone();
        let url = self.url.clone();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            let result = feed::load_news(&client, &url).await;
            let _ = tx.send(LoadOutcome { activation, result }).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("aborting pending news load");
            }
            handle.abort();
        }
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
