use crate::constants::{FIELD_SEPARATOR, OBJECT_OPEN, PAIR_SEPARATOR};
use crate::cursor::Cursor;
use crate::{Error, Result};

use super::object;

/// Classification progress for a single value. One variant per branch, each
/// holding only its own accumulator, so a digit run and a letter run can
/// never be live at the same time.
enum State {
    AwaitSeparator,
    Classifying,
    Digits(String),
    Letters(String),
}

/// Classify and extract the value following the next `:`.
///
/// The first classifying code point picks the branch: `{` hands the rest to
/// the balanced-object scanner, a decimal digit starts a digit run, a letter
/// starts a letter run. Anything else seen while classifying is consumed and
/// ignored. Running out of input mid-run completes the run; running out
/// before anything accumulated is a failure.
pub(crate) fn value(cursor: &mut Cursor<'_>) -> Result<String> {
    let mut state = State::AwaitSeparator;
    loop {
        state = match state {
            State::AwaitSeparator => match cursor.bump() {
                Some(PAIR_SEPARATOR) => State::Classifying,
                Some(_) => State::AwaitSeparator,
                None => return Err(Error::UnexpectedEof),
            },
            State::Classifying => match cursor.peek() {
                Some(OBJECT_OPEN) => return object::balanced(cursor).map(str::to_owned),
                Some(ch) if ch.is_ascii_digit() => State::Digits(String::new()),
                Some(ch) if ch.is_alphabetic() => State::Letters(String::new()),
                Some(_) => {
                    cursor.bump();
                    State::Classifying
                }
                None => return Err(Error::UnexpectedEof),
            },
            // A digit run ends at the first non-digit, so "3.14" yields "3".
            // Unsigned integer runs are the only supported numeric form.
            State::Digits(mut run) => match cursor.peek() {
                Some(ch) if ch.is_ascii_digit() => {
                    cursor.bump();
                    run.push(ch);
                    State::Digits(run)
                }
                _ => return Ok(run),
            },
            // A letter run drops every non-letter (closing quotes, digits,
            // spaces) and ends only at the field separator or the end of the
            // stream. Single-token alphabetic values are the only string
            // form reproduced faithfully.
            State::Letters(mut run) => match cursor.peek() {
                Some(FIELD_SEPARATOR) | None => return Ok(run),
                Some(ch) => {
                    cursor.bump();
                    if ch.is_alphabetic() {
                        run.push(ch);
                    }
                    State::Letters(run)
                }
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff(input: &str) -> Result<String> {
        value(&mut Cursor::new(input))
    }

    #[rstest::rstest]
    fn test_digit_run() {
        assert_eq!(sniff("\"x\":3").unwrap(), "3");
        assert_eq!(sniff(": 42,").unwrap(), "42");
    }

    #[rstest::rstest]
    fn test_digit_run_flushes_at_end_of_stream() {
        // No trailing separator needed.
        assert_eq!(sniff(":300").unwrap(), "300");
    }

    #[rstest::rstest]
    fn test_digit_run_stops_at_the_field_separator_without_consuming_it() {
        let mut cursor = Cursor::new(":7,\"next\":8");
        assert_eq!(value(&mut cursor).unwrap(), "7");
        assert_eq!(cursor.peek(), Some(','));
    }

    #[rstest::rstest]
    fn test_non_integer_numerics_truncate() {
        // Decimal points, signs and exponents are outside the digit set.
        assert_eq!(sniff(":3.14").unwrap(), "3");
        assert_eq!(sniff(":10e4,").unwrap(), "10");
        assert_eq!(sniff(":12.5.7").unwrap(), "12");
    }

    #[rstest::rstest]
    fn test_quoted_letter_run() {
        assert_eq!(sniff(":\"something\"").unwrap(), "something");
        assert_eq!(sniff(":\"something\",").unwrap(), "something");
    }

    #[rstest::rstest]
    fn test_letter_run_drops_non_letter_characters() {
        // Known scope restriction: only single-token alphabetic values
        // survive intact.
        assert_eq!(sniff(":\"a1 b-c\"").unwrap(), "abc");
        assert_eq!(sniff(":\"ISO 8879:1986\",").unwrap(), "ISO");
    }

    #[rstest::rstest]
    fn test_letter_run_accepts_unicode_letters() {
        assert_eq!(sniff(":\"grüße\"").unwrap(), "grüße");
    }

    #[rstest::rstest]
    fn test_nested_object_is_delegated_whole() {
        assert_eq!(sniff(":{\"y\":3}").unwrap(), "{\"y\":3}");
        assert_eq!(sniff(": {\"y\":{\"z\":1}},").unwrap(), "{\"y\":{\"z\":1}}");
    }

    #[rstest::rstest]
    fn test_unclosed_nested_object_propagates_eof() {
        assert_eq!(sniff(":{\"y\":3"), Err(Error::UnexpectedEof));
    }

    #[rstest::rstest]
    fn test_eof_before_the_separator() {
        assert_eq!(sniff(""), Err(Error::UnexpectedEof));
        assert_eq!(sniff("\"x\""), Err(Error::UnexpectedEof));
    }

    #[rstest::rstest]
    fn test_eof_while_classifying_with_nothing_accumulated() {
        assert_eq!(sniff(":"), Err(Error::UnexpectedEof));
        assert_eq!(sniff(": \" "), Err(Error::UnexpectedEof));
    }

    #[rstest::rstest]
    fn test_run_is_never_empty() {
        // A run only starts once its first code point is in sight, so an
        // accumulated value always has at least one character.
        for input in [":1", ":a", ":\"x\""] {
            assert!(!sniff(input).unwrap().is_empty());
        }
    }
}
