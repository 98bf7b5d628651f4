pub mod constants;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod text;

use std::io::Read;

pub use crate::cursor::Cursor;
pub use crate::decode::{ExpandedMap, ExpandedValue, FlatMap};
pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Extract the brace-balanced text of the first object in `input`, outer
/// braces included. Fails with [`Error::UnexpectedEof`] when the input holds
/// no object or the object never closes.
pub fn decode_object(input: &str) -> Result<&str> {
    decode::object_text(&mut Cursor::new(input))
}

/// Decode the single top-level object in `input` into a flat key-to-text
/// mapping.
///
/// Every value is returned as text; converting a numeric-looking value such
/// as `"3"` into an integer is the caller's responsibility. A value that is
/// itself an object is kept as its raw `{...}` text and can be fed back into
/// this function for one more level.
pub fn decode_flat(input: &str) -> Result<FlatMap> {
    decode::flat(&mut Cursor::new(input))
}

/// Decode the single top-level object in `input`, plus one more level for
/// every value that is itself an object. Grandchildren stay encoded as raw
/// text.
pub fn decode_expanded(input: &str) -> Result<ExpandedMap> {
    decode::expanded(&mut Cursor::new(input))
}

pub fn decode_flat_from_reader<R: Read>(reader: R) -> Result<FlatMap> {
    decode_flat(&read_to_string(reader)?)
}

pub fn decode_expanded_from_reader<R: Read>(reader: R) -> Result<ExpandedMap> {
    decode_expanded(&read_to_string(reader)?)
}

fn read_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::Read(err.to_string()))?;
    Ok(buf)
}
