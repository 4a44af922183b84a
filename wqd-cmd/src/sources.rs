//! Loading the datasets from local files or over HTTP.

use crate::DataSources;
use anyhow::Context;
use log::info;
use wqd_data::DashboardState;

/// Whether a source should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read one source into a string.
pub async fn read_source(client: &reqwest::Client, source: &str) -> anyhow::Result<String> {
    if is_remote(source) {
        let body = client
            .get(source)
            .send()
            .await
            .with_context(|| format!("requesting {} failed", source))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", source))?
            .text()
            .await?;
        Ok(body)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("reading {} failed", source))
    }
}

/// Load both datasets concurrently and bundle them.
pub async fn load_state(sources: &DataSources) -> anyhow::Result<DashboardState> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let (sensor_json, precip_json) = tokio::try_join!(
        read_source(&client, &sources.sensor_data),
        read_source(&client, &sources.precip_data),
    )?;
    info!(
        "Loaded {} ({} bytes) and {} ({} bytes)",
        sources.sensor_data,
        sensor_json.len(),
        sources.precip_data,
        precip_json.len()
    );
    DashboardState::from_json(&sensor_json, &precip_json)
}
