//! Ranked result table

use crate::escape_html;
use catalog::LabelCatalog;
use predict::PredictionResult;

/// Rows shown in the result table
pub const MAX_ROWS: usize = 3;

const NO_SOLUTION: &str = "No guidance available";

/// Loading placeholder shown while a request is in flight.
///
/// The orchestrator fully replaces it once a result or error arrives.
pub fn render_loading() -> String {
    r#"<div class="loading">Predicting... <span class="dot">.</span></div>"#.to_string()
}

/// Error panel replacing the result area's contents.
pub fn render_error(msg: &str) -> String {
    format!(r#"<div class="error">Error: {}</div>"#, escape_html(msg))
}

/// Render the top entries of a result as the four-column table.
///
/// The list arrives pre-ranked; rank is the 1-based position within
/// the truncated list. An empty result renders as an error panel,
/// never an empty table.
pub fn render_result(result: &PredictionResult, catalog: &LabelCatalog) -> String {
    if result.is_empty() {
        return render_error("No predictions available");
    }

    let mut html = String::from(
        "<table class=\"result-table\">\
         <thead><tr><th>Disease</th><th>Solution</th><th>Rank</th><th>Confidence</th></tr></thead>\
         <tbody>",
    );

    for (position, prediction) in result.top(MAX_ROWS).iter().enumerate() {
        let disease = catalog.resolve(prediction.index, prediction.label.as_deref());
        let solution = prediction.solution.as_deref().unwrap_or(NO_SOLUTION);
        let percent = (prediction.probability * 100.0).round() as i64;

        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>",
            escape_html(&disease),
            escape_html(solution),
            position + 1,
            percent
        ));
    }

    html.push_str("</tbody></table>");
    html
}
