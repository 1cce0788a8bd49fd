//! HTML format: indented JSON inside a `<pre>` block.

use serde_json::Value;

use super::{FormatRenderer, RenderError, RenderedBody};

pub struct HtmlFormat;

impl FormatRenderer for HtmlFormat {
    const NAME: &'static str = "html";
    const CONTENT_TYPE: &'static str = "text/html";

    fn render(value: &Value) -> Result<RenderedBody, RenderError> {
        let pretty = serde_json::to_string_pretty(value)?;
        Ok(RenderedBody::Text(format!("<pre>{pretty}</pre>")))
    }
}
