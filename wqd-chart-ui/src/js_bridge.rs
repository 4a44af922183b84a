//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded by the hosting page as a global. The bridge function in
//! `assets/js/plotly-bridge.js` is evaluated once Plotly is available and
//! exposed via `window.*`; this module serializes [`ChartSpec`]s and calls it.

use wqd_data::chart::ChartSpec;

// Embed the Plotly bridge at compile time
static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WQD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the bridge with a wait-for-Plotly polling loop. Call once at startup.
///
/// The bridge script is evaluated at global scope via indirect eval once the
/// `Plotly` global exists, then `renderPlotlyChart` is promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__wqdChartScripts = {};",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__wqdChartScripts);
                    delete window.__wqdChartScripts;
                    if (typeof renderPlotlyChart !== 'undefined') window.renderPlotlyChart = renderPlotlyChart;
                    window.__wqdChartsReady = true;
                    console.log('WQD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw `spec` into the element `container_id` with `Plotly.newPlot`.
///
/// Polls until the bridge is initialized and the container exists. Each call
/// fully replaces the container's previous figure.
pub fn render_chart(container_id: &str, spec: &ChartSpec) -> anyhow::Result<()> {
    // JSON is a valid JS expression, so the specs are inlined as object literals.
    let data = spec.data_json()?;
    let layout = spec.layout_json()?;
    let config = spec.config_json()?;
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wqdChartsReady &&
                    typeof window.renderPlotlyChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPlotlyChart('{container_id}', {data}, {layout}, {config});
                    }} catch(e) {{ console.error('[WQD] renderPlotlyChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
    Ok(())
}

/// Whether the hosting page contains an element with this id.
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .is_some()
}
