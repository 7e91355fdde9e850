#![cfg(test)]

use flagext_compiler::{
    analyze_enum,
    generate,
    generate_enum,
    generator::accessors,
    GeneratorOptions,
};
use flagext_schema::{Accessibility, RawAttribute, RawEnum, RawMember, RawValue};

fn attr(args: &[&str]) -> RawAttribute {
    RawAttribute::new(args.iter().map(|a| RawValue::from(*a)).collect())
}

fn flag_enum() -> RawEnum {
    RawEnum::new("FlagEnum", "HasFlagExtension.Sample", Accessibility::Public)
        .flags()
        .with_prefix(attr(&["Allow"]))
        .with_member(RawMember::new("ELEMENT_A").with_display_name(attr(&["ElementA"])))
        .with_member(RawMember::new("B").with_prefix(attr(&["Can"])))
        .with_member(RawMember::new("C"))
        .with_member(RawMember::new("D"))
        .with_member(RawMember::new("E"))
        .with_member(RawMember::new("EXCLUDED").with_exclude(RawAttribute::bare()))
}

fn grouped_enum() -> RawEnum {
    RawEnum::new("GroupedEnum", "HasFlagExtension.Sample", Accessibility::Public)
        .with_naming(attr(&["PASCAL", "PASCAL"]))
        .with_group(attr(&["Group1", "IsIn"]))
        .with_group(attr(&["Group2", "ContainedIn"]))
        .with_member(RawMember::new("A").with_group(attr(&["Group1"])))
        .with_member(RawMember::new("B").with_group(attr(&["Group1"])))
        .with_member(
            RawMember::new("C")
                .with_group(attr(&["Group1"]))
                .with_group(attr(&["Group2"])),
        )
        .with_member(RawMember::new("D").with_group(attr(&["Group2"])))
        .with_member(RawMember::new("E").with_group(attr(&["Group2"])))
}

#[test]
fn test_flag_enum_accessor_names() {
    let analysis = analyze_enum(&flag_enum(), None);
    let desc = analysis.descriptor.expect("FlagEnum should be analyzed");

    let names: Vec<String> = accessors(&desc).into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["AllowElementA", "CanB", "AllowC", "AllowD", "AllowE"]);

    let unit = generate(&desc, &GeneratorOptions::default()).unwrap();
    assert_eq!(unit.type_name, "FlagEnumExtensions");
    assert!(unit.text.contains(
        "    public static bool GetAllowElementA(this HasFlagExtension.Sample.FlagEnum value)\n        => value.HasFlag(HasFlagExtension.Sample.FlagEnum.ELEMENT_A);"
    ));
    assert!(unit.text.contains("        public bool CanB\n"));
    assert!(!unit.text.contains("EXCLUDED"));
    assert!(!unit.text.contains("AllowB"));
}

#[test]
fn test_grouped_enum_expressions() {
    let (unit, diagnostics) = generate_enum(&grouped_enum(), None, &GeneratorOptions::default());
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);

    let text = unit.unwrap().text;
    let t = "HasFlagExtension.Sample.GroupedEnum";
    assert!(text.contains(&format!(
        "GetIsInGroup1(this {t} value)\n        => value is {t}.A or {t}.B or {t}.C;"
    )));
    assert!(text.contains(&format!(
        "GetContainedInGroup2(this {t} value)\n        => value is {t}.C or {t}.D or {t}.E;"
    )));
    assert!(text.contains(&format!("public bool IsInGroup1\n            => value is {t}.A or {t}.B or {t}.C;")));
    assert!(text.contains(&format!("GetHasA(this {t} value)\n        => value == {t}.A;")));
}

#[test]
fn test_snake_naming() {
    let raw = RawEnum::new("E", "N", Accessibility::Public)
        .with_naming(attr(&["SNAKE", "SNAKE"]))
        .with_member(RawMember::new("ThisEnum"));
    let desc = analyze_enum(&raw, None).descriptor.unwrap();
    assert_eq!(accessors(&desc)[0].name, "Hasthis_enum");
}

#[test]
fn test_invalid_source_case_falls_back_to_member_name() {
    let raw = RawEnum::new("E", "N", Accessibility::Public)
        .with_naming(attr(&["KEBAB", "SNAKE"]))
        .with_member(RawMember::new("ThisEnum"));
    let analysis = analyze_enum(&raw, None);
    let ids: Vec<&str> = analysis.diagnostics.iter().map(|d| d.id()).collect();
    assert_eq!(ids, ["NAM-SRC"]);
    assert_eq!(accessors(&analysis.descriptor.unwrap())[0].name, "HasThisEnum");
}

#[test]
fn test_absent_naming_matches_explicit_pascal() {
    let implicit = flag_enum();
    let explicit = flag_enum().with_naming(attr(&["PASCAL", "PASCAL"]));

    let (implicit_unit, implicit_diags) = generate_enum(&implicit, None, &GeneratorOptions::default());
    let (explicit_unit, explicit_diags) = generate_enum(&explicit, None, &GeneratorOptions::default());

    assert_eq!(implicit_diags.iter().filter(|d| d.id() == "NAM-ABSENT").count(), 1);
    assert_eq!(implicit_diags.len(), 1);
    assert!(explicit_diags.is_empty());
    assert_eq!(implicit_unit, explicit_unit);
}

#[test]
fn test_excluded_member_appears_nowhere() {
    let raw = grouped_enum()
        .with_member(
            RawMember::new("Gone")
                .with_exclude(RawAttribute::new(vec![true.into()]))
                .with_group(attr(&["Group1"])),
        );
    let (unit, _) = generate_enum(&raw, None, &GeneratorOptions::default());
    assert!(!unit.unwrap().text.contains("Gone"));
}

#[test]
fn test_unknown_group_yields_one_warning_and_no_text() {
    let raw = grouped_enum().with_member(RawMember::new("F").with_group(attr(&["Group3"])));
    let (unit, diagnostics) = generate_enum(&raw, None, &GeneratorOptions::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].id(), "GRP-UNKNOWN");
    assert_eq!(diagnostics[0].args, ["Group3"]);

    let text = unit.unwrap().text;
    assert!(!text.contains("Group3"));
    assert!(text.contains("GetHasF"));
}

#[test]
fn test_group_prefix_ignores_member_prefix() {
    let raw = RawEnum::new("E", "N", Accessibility::Public)
        .with_naming(attr(&["PASCAL", "PASCAL"]))
        .with_group(attr(&["Pair"]))
        .with_member(RawMember::new("A").with_prefix(attr(&["Can"])).with_group(attr(&["Pair"])))
        .with_member(RawMember::new("B").with_group(attr(&["Pair"])));
    let desc = analyze_enum(&raw, None).descriptor.unwrap();
    let names: Vec<String> = accessors(&desc).into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["CanA", "HasB", "IsPair"]);
}

#[test]
fn test_generation_is_deterministic() {
    let options = GeneratorOptions::default();
    for raw in [flag_enum(), grouped_enum()] {
        let first = generate_enum(&raw, None, &options);
        let second = generate_enum(&raw, None, &options);
        assert_eq!(first, second);
    }
}
