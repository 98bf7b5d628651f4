use thiserror::Error as ThisError;

/// Failure signal shared by every scanner in the crate.
///
/// Stream exhaustion is the only decode failure: it is swallowed at the
/// decode-loop boundary, where running out of input is how a pass finishes,
/// and surfaced when it interrupts an unfinished scan such as an unclosed
/// object or an unterminated key delimiter.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("read failed: {0}")]
    Read(String),
}
