//! Request body extraction.
//!
//! Clients may send JSON or url-encoded forms. Both are decoded into a JSON
//! object so the domain validators only deal with one shape.
//!
//! Form keys use bracket syntax for nesting: `data[a]=1` builds an object,
//! `tags[]=a&tags[]=b` and `tags[0]=a` build arrays, and a repeated plain key
//! collects its values into an array. Nesting stops after five levels; the
//! rest of the key is kept as a literal name.

use axum::{
    extract::{FromRequest, Request},
    http::header,
};
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::core::Error;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bracket levels decoded below a form key's root.
const MAX_FORM_DEPTH: usize = 5;

/// Largest `[n]` index that builds an array; bigger ones become object keys.
const MAX_FORM_INDEX: usize = 20;

/// The decoded fields of a request body.
///
/// An empty body, an unknown content type or a JSON document that is not an
/// object all decode to an empty map; validation then reports the missing
/// fields.
#[derive(Debug, Clone, Default)]
pub struct RequestBody(pub Map<String, Value>);

impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::invalid_body(e.body_text()))?;

        decode_body(&content_type, &bytes).map(Self)
    }
}

/// Decode raw body bytes according to their media type.
pub fn decode_body(content_type: &str, bytes: &[u8]) -> Result<Map<String, Value>, Error> {
    if bytes.is_empty() {
        return Ok(Map::new());
    }

    if is_json(content_type) {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| Error::invalid_body(e.to_string()))?;
        return Ok(match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        });
    }

    if content_type == FORM_CONTENT_TYPE {
        return decode_form(bytes);
    }

    Ok(Map::new())
}

fn decode_form(bytes: &[u8]) -> Result<Map<String, Value>, Error> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(bytes).map_err(|e| Error::invalid_body(e.to_string()))?;

    let mut fields = Map::new();
    for (key, value) in pairs {
        let value = Value::String(value);
        match split_form_key(&key) {
            Some((root, path)) => {
                let slot = fields.entry(root).or_insert(Value::Null);
                assign(slot, &path, value);
            }
            None => {
                let slot = fields.entry(key.as_str()).or_insert(Value::Null);
                assign(slot, &[], value);
            }
        }
    }

    Ok(fields)
}

#[derive(Debug, PartialEq, Eq)]
enum KeySegment<'a> {
    /// `[]`
    Append,
    /// `[name]` or `[0]`
    Name(&'a str),
}

/// Split `root[a][b]` into its root and bracket segments.
///
/// Returns `None` for keys that are not bracketed or are malformed, which
/// are then used verbatim.
fn split_form_key(key: &str) -> Option<(&str, Vec<KeySegment<'_>>)> {
    let open = key.find('[').filter(|&i| i > 0)?;
    let (root, mut rest) = key.split_at(open);

    let mut segments = Vec::new();
    while let Some(inner) = rest.strip_prefix('[') {
        if segments.len() == MAX_FORM_DEPTH {
            segments.push(KeySegment::Name(rest));
            return Some((root, segments));
        }
        let close = inner.find(']')?;
        segments.push(match &inner[..close] {
            "" => KeySegment::Append,
            name => KeySegment::Name(name),
        });
        rest = &inner[close + 1..];
    }

    rest.is_empty().then_some((root, segments))
}

fn assign(slot: &mut Value, path: &[KeySegment<'_>], value: Value) {
    let Some((segment, rest)) = path.split_first() else {
        merge_leaf(slot, value);
        return;
    };

    match segment {
        KeySegment::Append => {
            if slot.is_null() {
                *slot = Value::Array(Vec::new());
            }
            if let Value::Array(items) = slot {
                let mut item = Value::Null;
                assign(&mut item, rest, value);
                items.push(item);
            }
        }
        KeySegment::Name(name) => {
            if let Some(index) = array_index(name) {
                if slot.is_null() {
                    *slot = Value::Array(Vec::new());
                }
                if let Value::Array(items) = slot {
                    match items.get_mut(index) {
                        Some(item) => assign(item, rest, value),
                        None => {
                            let mut item = Value::Null;
                            assign(&mut item, rest, value);
                            items.push(item);
                        }
                    }
                    return;
                }
            }

            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(fields) = slot {
                let child = fields.entry(*name).or_insert(Value::Null);
                assign(child, rest, value);
            }
        }
    }
}

/// Store a scalar; a second value for the same slot turns it into an array.
fn merge_leaf(slot: &mut Value, value: Value) {
    match slot {
        Value::Null => *slot = value,
        Value::Array(items) => items.push(value),
        // A nested object already claimed this key.
        Value::Object(_) => {}
        _ => {
            let first = slot.take();
            *slot = Value::Array(vec![first, value]);
        }
    }
}

fn array_index(name: &str) -> Option<usize> {
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok().filter(|&index| index <= MAX_FORM_INDEX)
}

fn is_json(content_type: &str) -> bool {
    content_type == "application/json" || content_type.ends_with("+json")
}
