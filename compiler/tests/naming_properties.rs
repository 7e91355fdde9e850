//! Property-based tests for naming conversion and generation determinism.

use flagext_compiler::{
    generate_enum,
    is_valid_identifier,
    naming::convert_case,
    convert,
    EnumNaming,
    GeneratorOptions,
    NamingCase,
};
use flagext_schema::{Accessibility, RawAttribute, RawEnum, RawMember};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-zα-ω_][A-Za-z0-9α-ω_]{0,16}"
}

fn supported_case() -> impl Strategy<Value = NamingCase> {
    prop_oneof![
        Just(NamingCase::Camel),
        Just(NamingCase::Pascal),
        Just(NamingCase::Snake),
        Just(NamingCase::ScreamingSnake),
    ]
}

fn any_case() -> impl Strategy<Value = NamingCase> {
    prop_oneof![
        supported_case(),
        Just(NamingCase::Kebab),
        Just(NamingCase::SpacedCamel),
        Just(NamingCase::Train),
        Just(NamingCase::Unknown),
    ]
}

/// Property: converting a valid identifier into a supported casing yields a
/// valid identifier.
#[test]
fn prop_conversion_preserves_identifier_validity() {
    proptest!(|(ident in identifier_strategy(), target in supported_case())| {
        prop_assert!(is_valid_identifier(&ident));
        let converted = convert_case(&ident, target);
        prop_assert!(
            is_valid_identifier(&converted),
            "{:?} → {:?} ({})", ident, converted, target
        );
    });
}

/// Property: a pair with an unsupported side leaves names untouched; a
/// supported pair always yields a valid identifier.
#[test]
fn prop_pair_conversion() {
    proptest!(|(ident in identifier_strategy(), source in any_case(), target in any_case())| {
        let naming = EnumNaming::new(source, target);
        let converted = convert(&ident, &naming);
        if naming.is_supported() {
            prop_assert!(is_valid_identifier(&converted));
        } else {
            prop_assert_eq!(converted, ident);
        }
    });
}

/// Property: two runs over the same metadata produce identical text and
/// diagnostics, and excluded members never appear in the text.
#[test]
fn prop_generation_is_deterministic() {
    proptest!(|(names in prop::collection::btree_set("[A-Z][a-z0-9]{0,8}", 1..8), is_flags in any::<bool>(), target in supported_case())| {
        let naming = RawAttribute::new(vec!["PASCAL".into(), target.name().into()]);
        let mut raw = RawEnum::new("Sample", "Props", Accessibility::Public).with_naming(naming);
        if is_flags {
            raw = raw.flags();
        }
        for name in &names {
            raw = raw.with_member(RawMember::new(name.as_str()));
        }
        raw = raw.with_member(RawMember::new("ExcludedMember").with_exclude(RawAttribute::bare()));

        let options = GeneratorOptions::default();
        let first = generate_enum(&raw, None, &options);
        let second = generate_enum(&raw, None, &options);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.1.is_empty());

        let text = first.0.map(|u| u.text).unwrap_or_default();
        prop_assert!(!text.contains("ExcludedMember"));
    });
}
