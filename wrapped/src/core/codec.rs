//! Row codec for persisted listening stats.
//!
//! A [`WrappedState`] travels as a fixed-order row of five text fields:
//!
//! ```text
//! totalMinutes, artistMinutes, songMinutes, topArtists, topSongs
//! ```
//!
//! Mappings are encoded as `key:minutes` entries joined by `|`, lists as items
//! joined by `|`. Inside keys and items, `|`, `:` and `\` are prefixed with `\`
//! so any string survives the trip. Decoding never fails: malformed numbers
//! degrade to `0` or drop their entry, and missing trailing fields take their
//! zero value.

use crate::core::types::{Minutes, WrappedState};

/// Separates entries of a mapping field and items of a list field.
pub const ENTRY_DELIM: char = '|';
/// Separates key from minutes inside a mapping entry.
pub const KV_DELIM: char = ':';
/// Makes the following character literal.
pub const ESCAPE: char = '\\';

/// Number of fields in an encoded row.
pub const FIELD_COUNT: usize = 5;

/// Column names written above the data row. Not read back by [`decode`].
pub const HEADER: [&str; FIELD_COUNT] = [
    "totalMinutes",
    "artistMinutes",
    "songMinutes",
    "topArtists",
    "topSongs",
];

/// Encode `state` into a row of exactly [`FIELD_COUNT`] fields.
pub fn encode(state: &WrappedState) -> Vec<String> {
    vec![
        state.total_minutes.to_string(),
        encode_minutes(&state.artist_minutes),
        encode_minutes(&state.song_minutes),
        encode_list(&state.top_artists),
        encode_list(&state.top_songs),
    ]
}

/// Decode a row produced by [`encode`].
///
/// Rows shorter than [`FIELD_COUNT`] are accepted; fields past the end of the
/// row take their zero value. Fields beyond [`FIELD_COUNT`] are ignored.
pub fn decode<S: AsRef<str>>(row: &[S]) -> WrappedState {
    WrappedState {
        total_minutes: field(row, 0).and_then(parse_minutes).unwrap_or(0),
        artist_minutes: field(row, 1).map(decode_minutes).unwrap_or_default(),
        song_minutes: field(row, 2).map(decode_minutes).unwrap_or_default(),
        top_artists: field(row, 3).map(decode_list).unwrap_or_default(),
        top_songs: field(row, 4).map(decode_list).unwrap_or_default(),
    }
}

fn field<S: AsRef<str>>(row: &[S], index: usize) -> Option<&str> {
    row.get(index).map(AsRef::as_ref)
}

/// Prefix every delimiter and escape character in `value` with [`ESCAPE`].
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == ENTRY_DELIM || c == KV_DELIM || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Split `text` on unescaped `delimiter`, unescaping the parts.
///
/// Always yields at least one part: `split_escaped("", d)` is `[""]`. A
/// dangling escape at the end of `text` is dropped.
pub fn split_escaped(text: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaping = false;
    for c in text.chars() {
        if escaping {
            current.push(c);
            escaping = false;
        } else if c == ESCAPE {
            escaping = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Split `text` on unescaped `delimiter`, leaving escape sequences in place.
///
/// Mapping entries are split twice (entries, then key from minutes), so the
/// outer split must keep escapes for the inner one to honour.
fn split_raw(text: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaping = false;
    for (index, c) in text.char_indices() {
        if escaping {
            escaping = false;
        } else if c == ESCAPE {
            escaping = true;
        } else if c == delimiter {
            parts.push(&text[start..index]);
            start = index + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Parse a minutes count. Negative numbers clamp to `0`; anything that is not
/// an integer yields `None`.
pub fn parse_minutes(text: &str) -> Option<u64> {
    if let Ok(minutes) = text.parse::<u64>() {
        return Some(minutes);
    }
    // Any width of negative number, not just what fits in i64.
    let digits = text.strip_prefix('-')?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(0)
}

fn encode_minutes(minutes: &Minutes) -> String {
    let mut encoded = String::new();
    for (key, value) in minutes {
        if !encoded.is_empty() {
            encoded.push(ENTRY_DELIM);
        }
        encoded.push_str(&escape(key));
        encoded.push(KV_DELIM);
        encoded.push_str(&value.to_string());
    }
    encoded
}

fn decode_minutes(field: &str) -> Minutes {
    let mut minutes = Minutes::new();
    if field.is_empty() {
        return minutes;
    }

    for entry in split_raw(field, ENTRY_DELIM) {
        if entry.is_empty() {
            continue;
        }
        let mut parts = split_escaped(entry, KV_DELIM).into_iter();
        let key = parts.next().unwrap_or_default();
        let rest: Vec<String> = parts.collect();
        let value = if rest.is_empty() {
            "0".to_string()
        } else {
            rest.join(KV_DELIM.to_string().as_str())
        };
        if key.is_empty() {
            continue;
        }
        if let Some(value) = parse_minutes(&value) {
            minutes.insert(key, value);
        }
    }
    minutes
}

fn encode_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| escape(item))
        .collect::<Vec<_>>()
        .join(ENTRY_DELIM.to_string().as_str())
}

fn decode_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    split_escaped(field, ENTRY_DELIM)
}
