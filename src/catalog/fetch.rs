use super::parse::{parse_catalog, parse_catalog_any, CatalogFormat};
use super::CatalogSource;
use crate::state::AppState;
use crate::types::{EndpointDescriptor, LoadingState};
use crate::widget::EndpointWidget;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

/// Spawns a background task that loads the catalog and installs fresh widgets
pub fn load_catalog_background(
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    source: CatalogSource,
) {
    state.write().data.loading_state = LoadingState::Loading;

    tokio::spawn(async move {
        match load_catalog(&client, &source).await {
            Ok(endpoints) => {
                info!(count = endpoints.len(), %source, "catalog loaded");
                let widgets = endpoints.into_iter().map(EndpointWidget::new).collect();
                state.write().install_widgets(widgets);
            }
            Err(e) => {
                error!(%source, "failed to load catalog: {e:#}");
                state.write().data.loading_state = LoadingState::Error(format!("{e:#}"));
            }
        }
    });
}

pub async fn load_catalog(
    client: &reqwest::Client,
    source: &CatalogSource,
) -> Result<Vec<EndpointDescriptor>> {
    match source {
        CatalogSource::File(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("could not read {}", path.display()))?;
            parse_catalog(&text, CatalogFormat::from_path(path))
        }
        CatalogSource::Remote(url) => {
            let text = client
                .get(url.clone())
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .with_context(|| format!("could not fetch {url}"))?
                .text()
                .await
                .with_context(|| format!("could not read body of {url}"))?;
            parse_catalog_any(&text)
        }
    }
}
