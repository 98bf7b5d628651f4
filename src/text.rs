/// Remove every whitespace code point from `input`.
///
/// Supports comparing decoded fragments against fixtures without caring
/// about the source formatting. This is a comparison aid, not a decoding
/// step: the scanners never normalize their input.
///
/// # Examples
/// ```
/// use shallowjson::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  3  "), "3");
/// assert_eq!(strip_whitespace("{\n  \"x\": 3\n}"), "{\"x\":3}");
/// ```
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}
