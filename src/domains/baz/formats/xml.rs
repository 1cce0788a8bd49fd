//! XML format.
//!
//! Produces a flat `<response>` document with one element per record field,
//! in field order. Values are written verbatim: `<` or `&` inside a value
//! yields malformed XML. Clients depend on the literal output, so escaping
//! is not applied.

use serde_json::Value;
use std::{borrow::Cow, fmt::Write};

use super::{FormatRenderer, RenderError, RenderedBody, json_kind};

const PROLOGUE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

pub struct XmlFormat;

impl FormatRenderer for XmlFormat {
    const NAME: &'static str = "xml";
    const CONTENT_TYPE: &'static str = "application/xml";

    fn render(value: &Value) -> Result<RenderedBody, RenderError> {
        let fields = value.as_object().ok_or(RenderError::NotAnObject {
            format: Self::NAME,
            found: json_kind(value),
        })?;

        let mut xml = String::new();
        writeln!(xml, "{PROLOGUE}")?;
        writeln!(xml, "<response>")?;
        for (key, value) in fields {
            writeln!(xml, "  <{key}>{}</{key}>", text_content(value))?;
        }
        xml.push_str("</response>");

        Ok(RenderedBody::Text(xml))
    }
}

fn text_content(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
