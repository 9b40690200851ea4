//! Character encodings for the input export and the QIF output.
//!
//! Labels follow the WHATWG Encoding Standard (`utf-8`, `latin1`,
//! `windows-1252`, `iso-8859-15`, ...).

use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};

use crate::errors::{ConvertError, ConvertResult};

/// Look up `label`, defaulting to UTF-8 when none is given.
pub fn resolve(label: Option<&str>) -> ConvertResult<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string())),
    }
}

/// Decode raw input bytes. A byte order mark takes precedence over `encoding`.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, used, had_errors) = encoding.decode(bytes);
    if used != encoding {
        debug!("byte order mark selects {} instead of {}", used.name(), encoding.name());
    }
    if had_errors {
        warn!("input is not valid {}; malformed sequences were replaced", used.name());
    }
    text.into_owned()
}

/// Encode output text. Characters the target encoding cannot represent are
/// written as numeric character references.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, used, had_errors) = encoding.encode(text);
    if had_errors {
        warn!("some characters cannot be represented in {}", used.name());
    }
    bytes.into_owned()
}
