pub const OBJECT_OPEN: char = '{';
pub const OBJECT_CLOSE: char = '}';
pub const KEY_QUOTE: char = '"';
pub const PAIR_SEPARATOR: char = ':';
pub const FIELD_SEPARATOR: char = ',';

#[inline]
pub fn is_object_text(s: &str) -> bool {
    s.starts_with(OBJECT_OPEN)
}
