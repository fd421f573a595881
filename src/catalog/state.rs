//! Catalog load state shared between the loader task and the compare action
//!
//! The loader publishes exactly once. Readers either check the current
//! state (and get `CatalogNotReady` while loading) or await the result.

use crate::catalog::{Catalog, CatalogLoader};
use crate::core::error::{DinoError, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Where the catalog load currently stands
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<Catalog>),
    Failed(String),
}

impl LoadState {
    fn to_result(&self) -> Option<Result<Arc<Catalog>>> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(catalog) => Some(Ok(Arc::clone(catalog))),
            LoadState::Failed(reason) => Some(Err(DinoError::CatalogUnavailable(reason.clone()))),
        }
    }
}

/// Write half, held by whoever performs the load
#[derive(Debug)]
pub struct CatalogPublisher {
    tx: watch::Sender<LoadState>,
}

impl CatalogPublisher {
    /// Publish the outcome of the load, consuming the publisher
    pub fn publish(self, result: Result<Catalog>) {
        let state = match result {
            Ok(catalog) => {
                tracing::info!(dinosaurs = catalog.len(), "Catalog ready");
                LoadState::Ready(Arc::new(catalog))
            }
            Err(e) => {
                tracing::error!("Catalog load failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        self.tx.send_replace(state);
    }
}

/// Read half, cheap to clone
#[derive(Debug, Clone)]
pub struct CatalogCell {
    rx: watch::Receiver<LoadState>,
}

impl CatalogCell {
    /// A cell still waiting for its publisher
    pub fn pending() -> (CatalogPublisher, CatalogCell) {
        let (tx, rx) = watch::channel(LoadState::Loading);
        (CatalogPublisher { tx }, CatalogCell { rx })
    }

    /// A cell that is ready from the start
    pub fn ready(catalog: Catalog) -> Self {
        let (publisher, cell) = Self::pending();
        publisher.publish(Ok(catalog));
        cell
    }

    /// Start loading `location` on the current tokio runtime
    pub fn spawn_load(loader: CatalogLoader, location: impl Into<String>) -> Self {
        let (publisher, cell) = Self::pending();
        let location = location.into();
        tokio::spawn(async move {
            let result = loader.load(&location).await;
            publisher.publish(result);
        });
        cell
    }

    pub fn state(&self) -> LoadState {
        self.rx.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.rx.borrow(), LoadState::Ready(_))
    }

    /// The catalog if it has loaded, without waiting
    pub fn current(&self) -> Result<Arc<Catalog>> {
        self.rx
            .borrow()
            .to_result()
            .unwrap_or(Err(DinoError::CatalogNotReady))
    }

    /// Wait until the load finishes, successfully or not
    pub async fn wait(&self) -> Result<Arc<Catalog>> {
        let mut rx = self.rx.clone();
        loop {
            let state = rx.borrow_and_update().clone();
            if let Some(result) = state.to_result() {
                return result;
            }

            if rx.changed().await.is_err() {
                // Publisher dropped; take whatever it left behind
                let last = rx.borrow().clone();
                return last.to_result().unwrap_or_else(|| {
                    Err(DinoError::CatalogUnavailable(
                        "loader stopped before publishing".into(),
                    ))
                });
            }
        }
    }
}
