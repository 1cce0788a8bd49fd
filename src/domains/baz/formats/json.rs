//! JSON format: the record is sent as-is.

use serde_json::Value;

use super::{FormatRenderer, RenderError, RenderedBody};

pub struct JsonFormat;

impl FormatRenderer for JsonFormat {
    const NAME: &'static str = "json";
    const CONTENT_TYPE: &'static str = "application/json";

    fn render(value: &Value) -> Result<RenderedBody, RenderError> {
        Ok(RenderedBody::Json(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_is_passthrough() {
        let value = json!({ "id": "1", "name": "Resource 1" });
        assert_eq!(
            JsonFormat::render(&value).unwrap(),
            RenderedBody::Json(value)
        );
    }
}
