mod html;
mod json;

pub use html::{export_html, render_html};
pub use json::{export_json, render_json};
