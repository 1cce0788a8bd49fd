//! Format Registry - the closed set of output formats.
//!
//! This is the single source of truth for which formats exist: both the
//! validator (`supported_formats`) and the renderer (`Format::render`)
//! read from it.

use serde::Serialize;
use serde_json::Value;

use super::{
    FormatRenderer, HtmlFormat, JsonFormat, RenderError, Rendered, RenderedBody, TextFormat,
    XmlFormat,
};

/// A supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
    Html,
    Xml,
}

impl Format {
    /// All formats, in the order they are advertised to clients.
    pub const ALL: [Format; 4] = [Format::Json, Format::Text, Format::Html, Format::Xml];

    /// Format used when the client does not ask for one.
    pub const DEFAULT: Format = Format::Json;

    /// Look up a format by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }

    /// Name clients use to request this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => JsonFormat::NAME,
            Format::Text => TextFormat::NAME,
            Format::Html => HtmlFormat::NAME,
            Format::Xml => XmlFormat::NAME,
        }
    }

    /// Content type of bodies rendered in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            Format::Json => JsonFormat::CONTENT_TYPE,
            Format::Text => TextFormat::CONTENT_TYPE,
            Format::Html => HtmlFormat::CONTENT_TYPE,
            Format::Xml => XmlFormat::CONTENT_TYPE,
        }
    }

    /// Render a serializable record in this format.
    pub fn render<T: Serialize>(self, record: &T) -> Result<Rendered, RenderError> {
        let value = serde_json::to_value(record)?;
        let body = self.render_value(&value)?;

        Ok(Rendered {
            body,
            content_type: self.content_type(),
        })
    }

    fn render_value(self, value: &Value) -> Result<RenderedBody, RenderError> {
        match self {
            Format::Json => JsonFormat::render(value),
            Format::Text => TextFormat::render(value),
            Format::Html => HtmlFormat::render(value),
            Format::Xml => XmlFormat::render(value),
        }
    }
}

/// Names of all supported formats.
pub fn supported_formats() -> Vec<&'static str> {
    Format::ALL.into_iter().map(Format::name).collect()
}
