//! Per-field validation. Every check raises at most one diagnostic and
//! always yields a value to continue with.

use crate::{
    diagnostics::{Checked, Diagnostic, DiagnosticKind},
    ident::is_valid_identifier,
    naming::{EnumNaming, NamingCase},
};
use flagext_schema::{Location, RawAttribute, RawValue};

/// Diagnostics raised for a single-string identifier attribute.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierKinds {
    pub absent:     DiagnosticKind,
    pub wrong_type: DiagnosticKind,
    pub invalid:    DiagnosticKind,
}

pub const PREFIX_KINDS: IdentifierKinds = IdentifierKinds {
    absent:     DiagnosticKind::PrefixNotSpecified,
    wrong_type: DiagnosticKind::InvalidPrefixType,
    invalid:    DiagnosticKind::InvalidPrefix,
};

pub const GROUP_NAME_KINDS: IdentifierKinds = IdentifierKinds {
    absent:     DiagnosticKind::PrefixNotSpecified,
    wrong_type: DiagnosticKind::InvalidGroupNameType,
    invalid:    DiagnosticKind::InvalidGroupName,
};

pub const GROUP_PREFIX_KINDS: IdentifierKinds = IdentifierKinds {
    absent:     DiagnosticKind::PrefixNotSpecified,
    wrong_type: DiagnosticKind::InvalidGroupPrefixType,
    invalid:    DiagnosticKind::InvalidGroupPrefix,
};

pub const DISPLAY_NAME_KINDS: IdentifierKinds = IdentifierKinds {
    absent:     DiagnosticKind::FlagNameNotSpecified,
    wrong_type: DiagnosticKind::InvalidFlagNameType,
    invalid:    DiagnosticKind::InvalidFlagName,
};

fn location<'a>(attr: &'a RawAttribute, owner: Option<&'a Location>) -> Option<&'a Location> {
    attr.location.as_ref().or(owner)
}

/// Absent → not excluded; present without argument → excluded;
/// non-bool argument → diagnosed and excluded.
pub fn check_exclude(attr: Option<&RawAttribute>, wrong_type: DiagnosticKind) -> Checked<bool> {
    let Some(attr) = attr else {
        return Checked::Ok(false);
    };

    match attr.arg(0) {
        None => Checked::Ok(true),
        Some(value) => match value.as_bool() {
            Some(exclude) => Checked::Ok(exclude),
            None => Checked::Defaulted(
                true,
                Diagnostic::new(wrong_type, attr.location.as_ref()).with_arg(value.type_name()),
            ),
        },
    }
}

/// Reads the first argument as an identifier. `None` means "use the default".
pub fn check_identifier(
    attr:  Option<&RawAttribute>,
    owner: Option<&Location>,
    kinds: IdentifierKinds,
) -> Checked<Option<String>> {
    let Some(attr) = attr else {
        return Checked::Ok(None);
    };
    let loc = location(attr, owner);

    match attr.arg(0) {
        None => Checked::Defaulted(None, Diagnostic::new(kinds.absent, loc)),
        Some(value) => check_identifier_value(value, loc, kinds),
    }
}

/// Like [`check_identifier`] for an optional argument at `index`: a missing
/// argument is not a problem.
pub fn check_optional_identifier(
    attr:  &RawAttribute,
    index: usize,
    kinds: IdentifierKinds,
) -> Checked<Option<String>> {
    match attr.arg(index) {
        None => Checked::Ok(None),
        Some(value) => check_identifier_value(value, attr.location.as_ref(), kinds),
    }
}

fn check_identifier_value(
    value: &RawValue,
    loc:   Option<&Location>,
    kinds: IdentifierKinds,
) -> Checked<Option<String>> {
    let Some(text) = value.as_str() else {
        return Checked::Defaulted(
            None,
            Diagnostic::new(kinds.wrong_type, loc).with_arg(value.type_name()),
        );
    };

    if !is_valid_identifier(text) {
        return Checked::Defaulted(None, Diagnostic::new(kinds.invalid, loc).with_arg(text));
    }

    Checked::Ok(Some(text.to_string()))
}

/// Naming preference with the rejected-casing checks applied. Invalid cases
/// are kept (best effort) but diagnosed; a malformed attribute falls back to
/// `fallback`.
pub fn check_naming(attr: &RawAttribute, fallback: EnumNaming) -> (EnumNaming, Vec<Diagnostic>) {
    let (Some(source), Some(target)) = (attr.arg(0), attr.arg(1)) else {
        return (
            fallback,
            vec![Diagnostic::new(DiagnosticKind::InvalidNamingArguments, attr.location.as_ref())],
        );
    };

    let source = check_case(NamingCase::parse(source), DiagnosticKind::InvalidSourceCase, attr);
    let target = check_case(NamingCase::parse(target), DiagnosticKind::InvalidTargetCase, attr);

    let diagnostics = [source.diagnostic(), target.diagnostic()]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    (EnumNaming::new(*source.value(), *target.value()), diagnostics)
}

fn check_case(case: NamingCase, kind: DiagnosticKind, attr: &RawAttribute) -> Checked<NamingCase> {
    if case.is_identifier_safe() {
        Checked::Ok(case)
    } else {
        Checked::Defaulted(case, Diagnostic::new(kind, attr.location.as_ref()).with_arg(case))
    }
}
