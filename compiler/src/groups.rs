//! Group declarations and membership resolution.
//!
//! Declarations are collected first; memberships are only ever resolved
//! against that set, whatever order the host saw them in.

use crate::{
    checks::{check_identifier, check_optional_identifier, GROUP_NAME_KINDS, GROUP_PREFIX_KINDS},
    diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink},
    types::{FlagDescriptor, GroupDescriptor, DEFAULT_GROUP_PREFIX},
};
use flagext_schema::{Location, RawAttribute};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDeclaration {
    pub name:   String,
    pub prefix: String,
}

/// Validates every declaration attribute on a type. Invalid names drop the
/// declaration, invalid prefixes fall back to the default, and a repeated
/// name keeps its first declaration.
pub fn collect_declarations(
    attrs: &[RawAttribute],
    owner: Option<&Location>,
    sink:  &mut DiagnosticSink,
) -> Vec<GroupDeclaration> {
    let mut declarations: Vec<GroupDeclaration> = Vec::new();

    for attr in attrs {
        let Some(name) = sink.take(check_identifier(Some(attr), owner, GROUP_NAME_KINDS)) else {
            continue;
        };

        if declarations.iter().any(|d| d.name == name) {
            debug!("ignoring repeated declaration of group {}", name);
            continue;
        }

        let prefix = sink
            .take(check_optional_identifier(attr, 1, GROUP_PREFIX_KINDS))
            .unwrap_or_else(|| DEFAULT_GROUP_PREFIX.to_string());

        declarations.push(GroupDeclaration { name, prefix });
    }

    declarations
}

/// Resolves one member's membership references. Every accepted name is a
/// declared group and appears once.
pub fn resolve_memberships(
    attrs:        &[RawAttribute],
    declarations: &[GroupDeclaration],
    sink:         &mut DiagnosticSink,
) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();

    for attr in attrs {
        let loc = attr.location.as_ref();

        if attr.args.len() != 1 {
            sink.push(Diagnostic::new(DiagnosticKind::InvalidGroupAddition, loc));
            continue;
        }

        let Some(name) = attr.args[0].as_str() else {
            sink.push(
                Diagnostic::new(DiagnosticKind::InvalidGroupNameType, loc)
                    .with_arg(attr.args[0].type_name()),
            );
            continue;
        };

        if !declarations.iter().any(|d| d.name == name) {
            sink.push(Diagnostic::new(DiagnosticKind::UnknownGroupName, loc).with_arg(name));
            continue;
        }

        if !groups.iter().any(|g| g == name) {
            groups.push(name.to_string());
        }
    }

    groups
}

/// One descriptor per declaration, members in declaration order. Excluded
/// flags never join a group.
pub fn build_groups(declarations: &[GroupDeclaration], flags: &[FlagDescriptor]) -> Vec<GroupDescriptor> {
    declarations
        .iter()
        .map(|decl| GroupDescriptor {
            name:    decl.name.clone(),
            prefix:  decl.prefix.clone(),
            members: flags
                .iter()
                .filter(|f| !f.exclude && f.groups.contains(&decl.name))
                .map(|f| f.name.clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagext_schema::RawValue;

    fn decl(args: Vec<RawValue>) -> RawAttribute {
        RawAttribute::new(args)
    }

    fn ids(sink: DiagnosticSink) -> Vec<&'static str> {
        sink.into_vec().iter().map(|d| d.id()).collect()
    }

    #[test]
    fn test_declarations() {
        let mut sink = DiagnosticSink::new();
        let decls = collect_declarations(
            &[
                decl(vec!["Group1".into(), "IsIn".into()]),
                decl(vec!["Group2".into()]),
                decl(vec!["Group1".into(), "Other".into()]),
            ],
            None,
            &mut sink,
        );
        assert!(sink.is_empty());
        assert_eq!(
            decls,
            vec![
                GroupDeclaration { name: "Group1".into(), prefix: "IsIn".into() },
                GroupDeclaration { name: "Group2".into(), prefix: "Is".into() },
            ]
        );
    }

    #[test]
    fn test_repeated_declaration_is_not_validated() {
        let mut sink = DiagnosticSink::new();
        let decls = collect_declarations(
            &[
                decl(vec!["G".into(), "IsIn".into()]),
                decl(vec!["G".into(), "bad prefix".into()]),
                decl(vec!["G".into(), RawValue::Int(2)]),
            ],
            None,
            &mut sink,
        );
        assert!(sink.is_empty());
        assert_eq!(decls, vec![GroupDeclaration { name: "G".into(), prefix: "IsIn".into() }]);
    }

    #[test]
    fn test_invalid_declarations() {
        let mut sink = DiagnosticSink::new();
        let decls = collect_declarations(
            &[
                RawAttribute::bare(),
                decl(vec![RawValue::Int(1)]),
                decl(vec!["1st".into()]),
                decl(vec!["Ok".into(), RawValue::Bool(true)]),
                decl(vec!["Fine".into(), "bad prefix".into()]),
            ],
            None,
            &mut sink,
        );
        assert_eq!(
            ids(sink),
            ["PFX-ABSENT", "GRP-NAME-TYPE", "GRP-NAME", "GRP-PREFIX-TYPE", "GRP-PREFIX"]
        );
        let names: Vec<(&str, &str)> = decls.iter().map(|d| (d.name.as_str(), d.prefix.as_str())).collect();
        assert_eq!(names, [("Ok", "Is"), ("Fine", "Is")]);
    }

    #[test]
    fn test_memberships() {
        let declared = vec![GroupDeclaration { name: "Group1".into(), prefix: "Is".into() }];
        let mut sink = DiagnosticSink::new();
        let groups = resolve_memberships(
            &[
                decl(vec!["Group1".into()]),
                decl(vec!["Group1".into()]),
                decl(vec!["Group9".into()]),
                decl(vec![RawValue::Int(3)]),
                decl(vec!["Group1".into(), "Prefix".into()]),
            ],
            &declared,
            &mut sink,
        );
        assert_eq!(groups, ["Group1"]);
        let diags = sink.into_vec();
        let got: Vec<(&str, Vec<String>)> = diags.iter().map(|d| (d.id(), d.args.clone())).collect();
        assert_eq!(
            got,
            vec![
                ("GRP-UNKNOWN", vec!["Group9".to_string()]),
                ("GRP-NAME-TYPE", vec!["int".to_string()]),
                ("GRP-ADD-INVALID", vec![]),
            ]
        );
    }

    #[test]
    fn test_build_groups_skips_excluded() {
        let flag = |name: &str, exclude: bool| FlagDescriptor {
            name:         name.into(),
            display_name: None,
            exclude,
            prefix:       None,
            groups:       vec!["G".into()],
        };
        let declared = [GroupDeclaration { name: "G".into(), prefix: "Is".into() }];
        let groups = build_groups(&declared, &[flag("A", false), flag("B", true), flag("C", false)]);
        assert_eq!(groups[0].members, ["A", "C"]);
    }
}
