use crate::constants::{OBJECT_CLOSE, OBJECT_OPEN};
use crate::cursor::Cursor;
use crate::{Error, Result};

/// Extract the brace-balanced span starting at the first `{`, both outer
/// braces included. The depth counter is a plain scalar: the grammar has a
/// single bracket kind, and the span ends at exactly the `}` that brings
/// the depth back to zero.
pub(crate) fn balanced<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str> {
    if !cursor.skip_to(OBJECT_OPEN) {
        return Err(Error::UnexpectedEof);
    }
    let start = cursor.offset();
    let mut depth = 0usize;
    while let Some(brace) = cursor.skip_to_either(OBJECT_OPEN, OBJECT_CLOSE) {
        cursor.bump();
        if brace == OBJECT_OPEN {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Ok(cursor.slice_from(start));
            }
        }
    }
    Err(Error::UnexpectedEof)
}
