//! Turns raw enumeration metadata into validated descriptors.
//!
//! Single forward pass per type: validate the type, validate each member,
//! collect group declarations, resolve memberships. Nothing here fails;
//! every problem becomes a diagnostic and a default.

use crate::{
    checks::{check_exclude, check_identifier, check_naming, DISPLAY_NAME_KINDS, PREFIX_KINDS},
    diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink},
    groups::{build_groups, collect_declarations, resolve_memberships, GroupDeclaration},
    naming::EnumNaming,
    types::{EnumDescriptor, FlagDescriptor, DEFAULT_FLAG_PREFIX},
};
use flagext_schema::{EnumDeclaration, RawAttribute, RawEnum, RawMember};
use tracing::debug;

/// Outcome of analyzing one type. `descriptor` is `None` when the type is
/// skipped or could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumAnalysis {
    pub descriptor:  Option<EnumDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EnumAnalysis {
    fn skipped(sink: DiagnosticSink) -> Self {
        EnumAnalysis {
            descriptor:  None,
            diagnostics: sink.into_vec(),
        }
    }
}

/// The project-wide naming preference, if any, and the diagnostics raised
/// while reading it. A malformed preference counts as not given.
pub fn analyze_project_naming(attr: Option<&RawAttribute>) -> (Option<EnumNaming>, Vec<Diagnostic>) {
    let Some(attr) = attr else {
        return (None, Vec::new());
    };

    if attr.args.len() < 2 {
        return (
            None,
            vec![Diagnostic::new(DiagnosticKind::InvalidNamingArguments, attr.location.as_ref())],
        );
    }

    let (naming, diagnostics) = check_naming(attr, EnumNaming::default());
    (Some(naming), diagnostics)
}

/// Analyzes a declaration as the host found it.
pub fn analyze_declaration(decl: &EnumDeclaration, project_naming: Option<EnumNaming>) -> EnumAnalysis {
    match &decl.symbol {
        Some(symbol) => analyze_enum(symbol, project_naming),
        None => {
            let mut sink = DiagnosticSink::new();
            sink.push(
                Diagnostic::new(DiagnosticKind::InvalidEnumSyntax, decl.location.as_ref()).with_arg(&decl.name),
            );
            EnumAnalysis::skipped(sink)
        }
    }
}

/// Analyzes a resolved type. `project_naming` applies when the type carries
/// no naming preference of its own.
pub fn analyze_enum(raw: &RawEnum, project_naming: Option<EnumNaming>) -> EnumAnalysis {
    let mut sink = DiagnosticSink::new();

    if !raw.accessibility.is_eligible() {
        debug!("skipping {}: {:?} is not generation-eligible", raw.full_name, raw.accessibility);
        return EnumAnalysis::skipped(sink);
    }

    let exclude = sink.take(check_exclude(raw.exclude.as_ref(), DiagnosticKind::InvalidExcludeEnumType));
    if exclude {
        debug!("skipping {}: excluded", raw.full_name);
        return EnumAnalysis::skipped(sink);
    }

    let prefix = sink
        .take(check_identifier(raw.prefix.as_ref(), None, PREFIX_KINDS))
        .unwrap_or_else(|| DEFAULT_FLAG_PREFIX.to_string());

    let naming = resolve_naming(raw.naming.as_ref(), project_naming, &mut sink);

    let mut flags: Vec<FlagDescriptor> = raw.members.iter().map(|m| analyze_member(m, &mut sink)).collect();

    let declarations = collect_declarations(&raw.groups, None, &mut sink);
    assign_groups(&raw.members, &mut flags, &declarations, &mut sink);
    let groups = build_groups(&declarations, &flags);

    debug!(
        "analyzed {}: {} members, {} groups, {} diagnostics",
        raw.full_name,
        flags.len(),
        groups.len(),
        sink.len()
    );

    EnumAnalysis {
        descriptor: Some(EnumDescriptor {
            name:          raw.name.clone(),
            namespace:     raw.namespace.clone(),
            full_name:     raw.full_name.clone(),
            accessibility: raw.accessibility,
            is_flags:      raw.is_flags,
            prefix,
            naming,
            flags,
            groups,
        }),
        diagnostics: sink.into_vec(),
    }
}

fn resolve_naming(
    attr:    Option<&RawAttribute>,
    project: Option<EnumNaming>,
    sink:    &mut DiagnosticSink,
) -> EnumNaming {
    let fallback = project.unwrap_or_default();

    match (attr, project) {
        (Some(attr), _) => {
            let (naming, diagnostics) = check_naming(attr, fallback);
            sink.extend(diagnostics);
            naming
        }
        (None, Some(project)) => project,
        (None, None) => {
            sink.push(Diagnostic::new(DiagnosticKind::NamingNotSpecified, None));
            EnumNaming::default()
        }
    }
}

fn analyze_member(member: &RawMember, sink: &mut DiagnosticSink) -> FlagDescriptor {
    let owner = member.location.as_ref();

    let exclude      = sink.take(check_exclude(member.exclude.as_ref(), DiagnosticKind::InvalidExcludeFlagType));
    let display_name = sink.take(check_identifier(member.display_name.as_ref(), owner, DISPLAY_NAME_KINDS));
    let prefix       = sink.take(check_identifier(member.prefix.as_ref(), owner, PREFIX_KINDS));

    FlagDescriptor {
        name: member.name.clone(),
        display_name,
        exclude,
        prefix,
        groups: Vec::new(),
    }
}

fn assign_groups(
    members:      &[RawMember],
    flags:        &mut [FlagDescriptor],
    declarations: &[GroupDeclaration],
    sink:         &mut DiagnosticSink,
) {
    for (member, flag) in members.iter().zip(flags.iter_mut()) {
        flag.groups = resolve_memberships(&member.groups, declarations, sink);
    }
}
