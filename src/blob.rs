//! Codec for the Base64 dictionary blob embedded in proxy `value` attributes.
//!
//! Alongside the `module` attribute, a serialized proxy duplicates its module
//! path inside a small dictionary literal, Base64-encoded into the `value`
//! attribute, for example:
//!
//! ```text
//! {"module": "PathScripts.PathDrilling", "class": "ObjectDrilling"}
//! ```
//!
//! [`patch`] decodes the blob, substitutes the module reference through the
//! rename table, and re-encodes it. Blobs that do not look like a dictionary
//! literal, or that carry none of the recognized keys, pass through
//! unchanged; only a failed Base64 decode is fatal.
//!
//! The legacy tool evaluated the decoded text as Python to parse it, which
//! executes untrusted archive content. This codec instead recognizes exactly
//! the flat `{"key": "value", ...}` shape the serializer emits and treats
//! anything else as opaque.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{Error, Result};
use crate::rename::{self, SectionKind};
use crate::report::{ConvertReport, Warning};

/// Keys that may hold the module reference, in priority order.
const MODULE_KEYS: [&str; 3] = ["editModule", "OpPageModule", "module"];

/// Rewrites the module reference inside a Base64-encoded blob.
///
/// Returns the re-encoded blob, or the input unchanged when there is nothing
/// to patch. Key order in the re-encoded literal matches the input. Errors
/// only when `encoded` is not valid Base64 over ASCII text.
pub fn patch(encoded: &str, kind: SectionKind, report: &mut ConvertReport) -> Result<String> {
    let raw = BASE64.decode(encoded)?;
    let text = String::from_utf8(raw)
        .map_err(|_| Error::MalformedBlob("decoded blob is not ASCII text".into()))?;
    if !text.is_ascii() {
        return Err(Error::MalformedBlob("decoded blob is not ASCII text".into()));
    }

    // Not a dictionary literal; some proxies store other data here.
    if !text.starts_with('{') || !text.ends_with('}') {
        return Ok(encoded.to_owned());
    }

    let Some(mut pairs) = parse_literal(&text) else {
        report.warn(Warning::UnrecognizedBlob {
            detail: "braced blob is not a flat string dictionary".into(),
        });
        return Ok(encoded.to_owned());
    };

    let Some(index) = MODULE_KEYS
        .iter()
        .find_map(|key| pairs.iter().position(|(k, _)| k == key))
    else {
        report.warn(Warning::UnrecognizedBlob {
            detail: "dictionary has no module key".into(),
        });
        return Ok(encoded.to_owned());
    };

    let Some(new_path) = rename::lookup(kind, &pairs[index].1) else {
        report.warn(Warning::UnmappedModule {
            module: pairs[index].1.clone(),
            section: kind,
        });
        return Ok(encoded.to_owned());
    };

    pairs[index].1 = new_path.to_owned();
    Ok(BASE64.encode(serialize_literal(&pairs)))
}

/// Parses the exact `{"key": "value", ...}` shape the legacy serializer
/// emits. Returns `None` for anything else; this must never evaluate the
/// text.
fn parse_literal(text: &str) -> Option<Vec<(String, String)>> {
    let body = text.strip_prefix('{')?.strip_suffix('}')?;
    let mut pairs = Vec::new();
    let mut rest = body.trim();
    if rest.is_empty() {
        return Some(pairs);
    }
    loop {
        let (key, after_key) = parse_string(rest)?;
        let after_colon = after_key.trim_start().strip_prefix(':')?;
        let (value, after_value) = parse_string(after_colon.trim_start())?;
        pairs.push((key, value));

        let after_value = after_value.trim_start();
        if after_value.is_empty() {
            return Some(pairs);
        }
        rest = after_value.strip_prefix(',')?.trim_start();
    }
}

/// Parses one double-quoted string, returning it and the remaining input.
/// The serializer never emits escapes, so a backslash disqualifies the blob.
fn parse_string(input: &str) -> Option<(String, &str)> {
    let rest = input.strip_prefix('"')?;
    let end = rest.find('"')?;
    let content = &rest[..end];
    if content.contains('\\') {
        return None;
    }
    Some((content.to_owned(), &rest[end + 1..]))
}

fn serialize_literal(pairs: &[(String, String)]) -> String {
    let body = pairs
        .iter()
        .map(|(key, value)| format!("\"{key}\": \"{value}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}
