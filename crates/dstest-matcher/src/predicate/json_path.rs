//! Dotted attribute path resolution over the raw body text.
//!
//! Supports:
//! - `field` - top-level field
//! - `field.nested` - nested field
//! - `array.0` - array index
//! - `array.#` - array length
//!
//! Each level is deserialized into borrowed `RawValue` slices, so a resolved
//! value is the exact text of the body (`12.50` stays `12.50`).

use serde_json::value::RawValue;
use std::collections::HashMap;

/// A value found at the end of an attribute path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Slice of the body holding the value, without surrounding whitespace.
    Raw(&'a str),
    Length(usize),
}

impl Resolved<'_> {
    /// Text of the resolved value as it appears in the body.
    pub fn raw(&self) -> String {
        match self {
            Resolved::Raw(text) => (*text).to_string(),
            Resolved::Length(len) => len.to_string(),
        }
    }
}

/// Parse `body` far enough to validate it and borrow its top-level value.
pub fn parse_body(body: &str) -> Option<&RawValue> {
    serde_json::from_str(body).ok()
}

/// Follow `path` through `root`.
///
/// Returns `None` for an empty path, an empty segment, or any segment that
/// cannot be followed.
pub fn resolve<'a>(root: &'a RawValue, path: &str) -> Option<Resolved<'a>> {
    if path.is_empty() {
        return None;
    }

    let mut current = root;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            return None;
        }

        let text = current.get();
        current = match text.trim_start().bytes().next()? {
            b'{' => {
                let fields: HashMap<String, &'a RawValue> = serde_json::from_str(text).ok()?;
                *fields.get(segment)?
            }
            b'[' => {
                let items: Vec<&'a RawValue> = serde_json::from_str(text).ok()?;
                if segment == "#" {
                    // Length is terminal; nothing can follow it.
                    return segments
                        .peek()
                        .is_none()
                        .then_some(Resolved::Length(items.len()));
                }
                let index = segment.parse::<usize>().ok()?;
                *items.get(index)?
            }
            _ => return None,
        };
    }

    Some(Resolved::Raw(current.get().trim()))
}

/// Parse `body` as JSON and return the raw text found at `path`.
pub fn lookup_raw(body: &str, path: &str) -> Option<String> {
    let root = parse_body(body)?;
    resolve(root, path).map(|resolved| resolved.raw())
}
