//! Identifier casing conventions and conversion between them.

use crate::ident::is_valid_identifier;
use flagext_schema::RawValue;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamingCase {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `HELLO_WORLD`
    ScreamingSnake,
    /// `hello-world`
    Kebab,
    /// `hello World`
    SpacedCamel,
    /// `Hello-World`
    Train,
    /// Unrecognized input, never a valid conversion target.
    Unknown,
}

impl NamingCase {
    /// Reads a case from an attribute argument: its ordinal or its name.
    pub fn parse(value: &RawValue) -> NamingCase {
        match value {
            RawValue::Int(i) => NamingCase::from_ordinal(*i),
            RawValue::Str(s) => NamingCase::from_name(s),
            _ => NamingCase::Unknown,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> NamingCase {
        match ordinal {
            0 => NamingCase::Camel,
            1 => NamingCase::Pascal,
            2 => NamingCase::Snake,
            3 => NamingCase::ScreamingSnake,
            4 => NamingCase::Kebab,
            5 => NamingCase::SpacedCamel,
            6 => NamingCase::Train,
            _ => NamingCase::Unknown,
        }
    }

    pub fn from_name(name: &str) -> NamingCase {
        match name {
            "CAMEL"           => NamingCase::Camel,
            "PASCAL"          => NamingCase::Pascal,
            "SNAKE"           => NamingCase::Snake,
            "SCREAMING_SNAKE" => NamingCase::ScreamingSnake,
            "KEBAB"           => NamingCase::Kebab,
            "SPACED_CAMEL"    => NamingCase::SpacedCamel,
            "TRAIN"           => NamingCase::Train,
            _                 => NamingCase::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamingCase::Camel          => "CAMEL",
            NamingCase::Pascal         => "PASCAL",
            NamingCase::Snake          => "SNAKE",
            NamingCase::ScreamingSnake => "SCREAMING_SNAKE",
            NamingCase::Kebab          => "KEBAB",
            NamingCase::SpacedCamel    => "SPACED_CAMEL",
            NamingCase::Train          => "TRAIN",
            NamingCase::Unknown        => "UNKNOWN",
        }
    }

    /// Whether words in this case always join into a bare identifier.
    /// Kebab, spaced camel and train need separators identifiers can't hold.
    pub fn is_identifier_safe(self) -> bool {
        matches!(
            self,
            NamingCase::Camel | NamingCase::Pascal | NamingCase::Snake | NamingCase::ScreamingSnake
        )
    }

    fn separator(self) -> &'static str {
        match self {
            NamingCase::Snake | NamingCase::ScreamingSnake => "_",
            NamingCase::Kebab | NamingCase::Train          => "-",
            NamingCase::SpacedCamel                        => " ",
            _                                              => "",
        }
    }

    fn render_word(self, index: usize, word: &str) -> String {
        match self {
            NamingCase::Camel | NamingCase::SpacedCamel if index == 0 => word.to_lowercase(),
            NamingCase::Camel | NamingCase::SpacedCamel | NamingCase::Pascal | NamingCase::Train => {
                capitalize(word)
            }
            NamingCase::Snake | NamingCase::Kebab => word.to_lowercase(),
            NamingCase::ScreamingSnake => word.to_uppercase(),
            NamingCase::Unknown => word.to_string(),
        }
    }
}

impl fmt::Display for NamingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source → target naming preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnumNaming {
    pub source: NamingCase,
    pub target: NamingCase,
}

impl EnumNaming {
    pub const fn new(source: NamingCase, target: NamingCase) -> Self {
        EnumNaming { source, target }
    }

    /// Both sides usable; otherwise names pass through untransformed.
    pub fn is_supported(&self) -> bool {
        self.source.is_identifier_safe() && self.target.is_identifier_safe()
    }
}

impl Default for EnumNaming {
    fn default() -> Self {
        EnumNaming::new(NamingCase::Pascal, NamingCase::Pascal)
    }
}

impl fmt::Display for EnumNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Converts `identifier` according to `naming`. Unsupported preferences
/// return the identifier unchanged.
pub fn convert(identifier: &str, naming: &EnumNaming) -> String {
    if !naming.is_supported() {
        return identifier.to_string();
    }
    convert_case(identifier, naming.target)
}

/// Splits `identifier` into words and joins them in `target` casing.
///
/// Falls back to the input when there is nothing to join, or when an
/// identifier-safe target would not yield a valid identifier.
pub fn convert_case(identifier: &str, target: NamingCase) -> String {
    if target == NamingCase::Unknown {
        return identifier.to_string();
    }

    let words = split_words(identifier);
    if words.is_empty() {
        return identifier.to_string();
    }

    let converted = words
        .iter()
        .enumerate()
        .map(|(i, w)| target.render_word(i, w))
        .collect::<Vec<_>>()
        .join(target.separator());

    if target.is_identifier_safe() && !is_valid_identifier(&converted) {
        return identifier.to_string();
    }
    converted
}

/// Word boundaries are `_`, `-`, spaces, and a lowercase letter followed by
/// an uppercase one. Digits stay with the word before them.
pub fn split_words(identifier: &str) -> Vec<String> {
    let mut words   = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in identifier.chars() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            if p.is_lowercase() && c.is_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming(source: NamingCase, target: NamingCase) -> EnumNaming {
        EnumNaming::new(source, target)
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("ThisEnum"), ["This", "Enum"]);
        assert_eq!(split_words("ELEMENT_A"), ["ELEMENT", "A"]);
        assert_eq!(split_words("helloWorld"), ["hello", "World"]);
        assert_eq!(split_words("hello-world x"), ["hello", "world", "x"]);
        assert_eq!(split_words("__a__b"), ["a", "b"]);
        assert_eq!(split_words("Item2Value"), ["Item2Value"]);
        assert_eq!(split_words("item2value"), ["item2value"]);
        assert_eq!(split_words("HTTPServer"), ["HTTPServer"]);
        assert!(split_words("___").is_empty());
    }

    #[test]
    fn test_all_targets() {
        let id = "helloWorld";
        assert_eq!(convert_case(id, NamingCase::Camel), "helloWorld");
        assert_eq!(convert_case(id, NamingCase::Pascal), "HelloWorld");
        assert_eq!(convert_case(id, NamingCase::Snake), "hello_world");
        assert_eq!(convert_case(id, NamingCase::ScreamingSnake), "HELLO_WORLD");
        assert_eq!(convert_case(id, NamingCase::Kebab), "hello-world");
        assert_eq!(convert_case(id, NamingCase::SpacedCamel), "hello World");
        assert_eq!(convert_case(id, NamingCase::Train), "Hello-World");
        assert_eq!(convert_case(id, NamingCase::Unknown), "helloWorld");
    }

    #[test]
    fn test_snake_to_snake() {
        let n = naming(NamingCase::Snake, NamingCase::Snake);
        assert_eq!(convert("ThisEnum", &n), "this_enum");
    }

    #[test]
    fn test_screaming_snake_to_pascal() {
        let n = naming(NamingCase::ScreamingSnake, NamingCase::Pascal);
        assert_eq!(convert("ELEMENT_A", &n), "ElementA");
        assert_eq!(convert("EXCLUDED", &n), "Excluded");
    }

    #[test]
    fn test_pascal_default_keeps_pascal_names() {
        let n = EnumNaming::default();
        for id in ["ThisEnum", "Group1", "B", "ElementA"] {
            assert_eq!(convert(id, &n), id);
        }
    }

    #[test]
    fn test_unsupported_pair_passes_through() {
        assert_eq!(convert("ThisEnum", &naming(NamingCase::Kebab, NamingCase::Pascal)), "ThisEnum");
        assert_eq!(convert("ThisEnum", &naming(NamingCase::Pascal, NamingCase::Train)), "ThisEnum");
        assert_eq!(convert("ThisEnum", &naming(NamingCase::Unknown, NamingCase::Snake)), "ThisEnum");
    }

    #[test]
    fn test_invalid_result_falls_back() {
        assert_eq!(convert_case("_1", NamingCase::Pascal), "_1");
        assert_eq!(convert_case("_", NamingCase::Snake), "_");
    }

    #[test]
    fn test_parse() {
        assert_eq!(NamingCase::parse(&RawValue::Int(1)), NamingCase::Pascal);
        assert_eq!(NamingCase::parse(&RawValue::Int(6)), NamingCase::Train);
        assert_eq!(NamingCase::parse(&RawValue::Int(7)), NamingCase::Unknown);
        assert_eq!(NamingCase::parse(&RawValue::from("SCREAMING_SNAKE")), NamingCase::ScreamingSnake);
        assert_eq!(NamingCase::parse(&RawValue::from("snake")), NamingCase::Unknown);
        assert_eq!(NamingCase::parse(&RawValue::Bool(true)), NamingCase::Unknown);
    }
}
