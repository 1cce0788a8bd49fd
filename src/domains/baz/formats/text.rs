//! Plain text format: compact JSON on a single line.

use serde_json::Value;

use super::{FormatRenderer, RenderError, RenderedBody};

pub struct TextFormat;

impl FormatRenderer for TextFormat {
    const NAME: &'static str = "text";
    const CONTENT_TYPE: &'static str = "text/plain";

    fn render(value: &Value) -> Result<RenderedBody, RenderError> {
        Ok(RenderedBody::Text(serde_json::to_string(value)?))
    }
}
