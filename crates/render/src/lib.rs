//! Result Rendering
//!
//! Turns a `PredictionResult` into the bounded, HTML-escaped markup
//! that replaces the result area. Pure string-producing functions; the
//! surrounding UI owns where the markup lands.

mod escape;
mod table;

pub use escape::escape_html;
pub use table::{render_error, render_loading, render_result, MAX_ROWS};
