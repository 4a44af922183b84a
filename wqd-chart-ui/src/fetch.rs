//! Browser-side loading of the two datasets.

use anyhow::{anyhow, bail, Context};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wqd_data::state::assemble;
use wqd_data::{DashboardConfig, DashboardState, LoadFailure};

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// `fetch` a resource relative to the page and return its body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)
        .with_context(|| format!("fetching {} failed", url))?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;
    if !resp.ok() {
        bail!("fetching {} returned HTTP {}", url, resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| anyhow!("{} did not return a text body", url))
}

/// Fetch and parse both datasets. Any failure aborts the whole load and
/// names the dataset responsible.
pub async fn load_dashboard(config: &DashboardConfig) -> Result<DashboardState, LoadFailure> {
    let sensor_json = fetch_text(&config.sensor_data_url)
        .await
        .map_err(|e| LoadFailure::new(&config.sensor_data_url, &e))?;
    let precip_json = fetch_text(&config.precip_data_url)
        .await
        .map_err(|e| LoadFailure::new(&config.precip_data_url, &e))?;
    log::info!(
        "[WQD] fetch: {} bytes of sensor data, {} bytes of precipitation data",
        sensor_json.len(),
        precip_json.len()
    );
    assemble(config, &sensor_json, &precip_json)
}
