use std::collections::HashMap;

use serde::Serialize;

use crate::constants::{is_object_text, KEY_QUOTE};
use crate::cursor::Cursor;
use crate::{Error, Result};

mod object;
mod sniff;
mod span;

/// Single-level decode result: key to verbatim value text.
pub type FlatMap = HashMap<String, String>;

/// Two-level decode result.
pub type ExpandedMap = HashMap<String, ExpandedValue>;

/// A decoded value plus one optional level of nested fields, present only
/// when the raw text is itself an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedValue {
    pub raw: String,
    pub children: Option<FlatMap>,
}

/// Brace-balanced text of the next object in the stream, outer braces
/// included.
pub fn object_text<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str> {
    object::balanced(cursor)
}

/// Decode the single top-level object in the stream into a flat mapping.
///
/// The object is bounded first, then scanned as a fresh stream: quoted key,
/// sniffed value, repeat. Exhausting that inner stream is the expected way
/// for the loop to finish, so it never surfaces as an error; a key whose
/// value extraction came up empty is left out of the mapping. Only a failure
/// to bound the outer object propagates.
pub fn flat(cursor: &mut Cursor<'_>) -> Result<FlatMap> {
    let body = object::balanced(cursor)?;
    let mut inner = Cursor::new(body);
    let mut fields = FlatMap::new();
    loop {
        let key = match span::delimited(&mut inner, KEY_QUOTE) {
            Ok(key) => key,
            Err(Error::UnexpectedEof) => break,
            Err(err) => return Err(err),
        };
        let value = match sniff::value(&mut inner) {
            Ok(value) => value,
            Err(Error::UnexpectedEof) => break,
            Err(err) => return Err(err),
        };
        fields.insert(key.to_owned(), value);
    }
    Ok(fields)
}

/// Decode the single top-level object, then decode one more level for every
/// value that is itself an object.
///
/// Grandchildren stay encoded as raw text inside the child mapping; callers
/// wanting more depth re-feed those values to [`flat`] themselves.
pub fn expanded(cursor: &mut Cursor<'_>) -> Result<ExpandedMap> {
    let fields = flat(cursor)?;
    let mut result = ExpandedMap::with_capacity(fields.len());
    for (key, raw) in fields {
        let children = if is_object_text(&raw) {
            Some(flat(&mut Cursor::new(&raw))?)
        } else {
            None
        };
        result.insert(key, ExpandedValue { raw, children });
    }
    Ok(result)
}
