use crate::cursor::Cursor;
use crate::{Error, Result};

/// Text strictly between the first and second occurrence of `delim`. The
/// cursor is left just past the closing delimiter.
pub(crate) fn delimited<'a>(cursor: &mut Cursor<'a>, delim: char) -> Result<&'a str> {
    if !cursor.skip_to(delim) {
        return Err(Error::UnexpectedEof);
    }
    cursor.bump();
    let start = cursor.offset();
    if !cursor.skip_to(delim) {
        return Err(Error::UnexpectedEof);
    }
    let span = cursor.slice_from(start);
    cursor.bump();
    Ok(span)
}
