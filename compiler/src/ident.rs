use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // start: letters, letter numbers, '_'
    // continue: letters, letter numbers, digits, combining marks, connectors, format chars
    static ref IDENTIFIER: Regex = Regex::new(
        r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Pc}\p{Cf}]*$"
    ).unwrap();
}

/// Returns `true` if `text` can be used as a generated identifier.
/// Reserved words are not checked here.
pub fn is_valid_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}
