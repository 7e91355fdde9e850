//! The fixed diagnostic catalog and the diagnostic value type.
//!
//! Ids are stable; hosts filter and assert on them.

use flagext_schema::Location;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error   => f.pad("error"),
            Severity::Warning => f.pad("warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // naming
    InvalidSourceCase,
    InvalidTargetCase,
    NamingNotSpecified,
    InvalidNamingArguments,
    // prefixes
    InvalidPrefix,
    PrefixNotSpecified,
    InvalidPrefixType,
    // exclusion
    InvalidExcludeEnumType,
    InvalidExcludeFlagType,
    // display names
    InvalidFlagName,
    FlagNameNotSpecified,
    InvalidFlagNameType,
    // groups
    InvalidGroupName,
    InvalidGroupNameType,
    InvalidGroupPrefix,
    InvalidGroupPrefixType,
    UnknownGroupName,
    InvalidGroupAddition,
    // unresolvable declarations
    InvalidEnumSyntax,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 19] = [
        DiagnosticKind::InvalidSourceCase,
        DiagnosticKind::InvalidTargetCase,
        DiagnosticKind::NamingNotSpecified,
        DiagnosticKind::InvalidNamingArguments,
        DiagnosticKind::InvalidPrefix,
        DiagnosticKind::PrefixNotSpecified,
        DiagnosticKind::InvalidPrefixType,
        DiagnosticKind::InvalidExcludeEnumType,
        DiagnosticKind::InvalidExcludeFlagType,
        DiagnosticKind::InvalidFlagName,
        DiagnosticKind::FlagNameNotSpecified,
        DiagnosticKind::InvalidFlagNameType,
        DiagnosticKind::InvalidGroupName,
        DiagnosticKind::InvalidGroupNameType,
        DiagnosticKind::InvalidGroupPrefix,
        DiagnosticKind::InvalidGroupPrefixType,
        DiagnosticKind::UnknownGroupName,
        DiagnosticKind::InvalidGroupAddition,
        DiagnosticKind::InvalidEnumSyntax,
    ];

    pub fn id(self) -> &'static str {
        self.entry().0
    }

    pub fn severity(self) -> Severity {
        self.entry().1
    }

    pub fn title(self) -> &'static str {
        self.entry().2
    }

    /// Message template; `{0}`, `{1}`… are replaced by the diagnostic's arguments.
    pub fn message_format(self) -> &'static str {
        self.entry().3
    }

    pub fn from_id(id: &str) -> Option<DiagnosticKind> {
        DiagnosticKind::ALL.into_iter().find(|k| k.id() == id)
    }

    fn entry(self) -> (&'static str, Severity, &'static str, &'static str) {
        use DiagnosticKind::*;
        use Severity::*;

        match self {
            InvalidSourceCase => (
                "NAM-SRC", Error,
                "Invalid source naming case",
                "Source naming case {0} cannot produce valid identifiers",
            ),
            InvalidTargetCase => (
                "NAM-TGT", Error,
                "Invalid target naming case",
                "Target naming case {0} cannot produce valid identifiers",
            ),
            NamingNotSpecified => (
                "NAM-ABSENT", Warning,
                "Naming case not specified",
                "Naming case is not specified, using the default (PASCAL -> PASCAL)",
            ),
            InvalidNamingArguments => (
                "NAM-ARGS", Error,
                "Invalid naming arguments",
                "Naming arguments are not valid, expected a source and a target naming case",
            ),
            InvalidPrefix => (
                "PFX-INVALID", Error,
                "Invalid prefix",
                "Accessor prefix '{0}' is not a valid identifier",
            ),
            PrefixNotSpecified => (
                "PFX-ABSENT", Error,
                "Prefix not specified",
                "Accessor prefix is not specified in the attribute",
            ),
            InvalidPrefixType => (
                "PFX-TYPE", Error,
                "Invalid prefix type",
                "Accessor prefix has type {0}, expected string",
            ),
            InvalidExcludeEnumType => (
                "EXC-ENUM-TYPE", Warning,
                "Invalid enum exclusion type",
                "Enum exclusion argument has type {0}, expected bool",
            ),
            InvalidExcludeFlagType => (
                "EXC-FLAG-TYPE", Warning,
                "Invalid flag exclusion type",
                "Flag exclusion argument has type {0}, expected bool",
            ),
            InvalidFlagName => (
                "NAME-INVALID", Error,
                "Invalid flag name",
                "Flag display name '{0}' is not a valid identifier",
            ),
            FlagNameNotSpecified => (
                "NAME-ABSENT", Error,
                "Flag name not specified",
                "Flag display name is not specified in the attribute",
            ),
            InvalidFlagNameType => (
                "NAME-TYPE", Error,
                "Invalid flag name type",
                "Flag display name has type {0}, expected string",
            ),
            InvalidGroupName => (
                "GRP-NAME", Error,
                "Invalid group name",
                "Cannot generate group accessor, invalid group name '{0}'",
            ),
            InvalidGroupNameType => (
                "GRP-NAME-TYPE", Error,
                "Invalid group name type",
                "Cannot generate group accessor, group name has type {0}, expected string",
            ),
            InvalidGroupPrefix => (
                "GRP-PREFIX", Error,
                "Invalid group prefix",
                "Group prefix '{0}' is not a valid identifier",
            ),
            InvalidGroupPrefixType => (
                "GRP-PREFIX-TYPE", Error,
                "Invalid group prefix type",
                "Group prefix has type {0}, expected string",
            ),
            UnknownGroupName => (
                "GRP-UNKNOWN", Warning,
                "Unknown group name",
                "Cannot add flag to group, unknown group name '{0}'",
            ),
            InvalidGroupAddition => (
                "GRP-ADD-INVALID", Error,
                "Invalid group addition",
                "Group membership takes exactly one group name",
            ),
            InvalidEnumSyntax => (
                "SYNTAX-INVALID", Error,
                "Invalid enum syntax",
                "Cannot generate accessors for '{0}', the declaration could not be resolved",
            ),
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for DiagnosticKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// A recorded problem. Never aborts generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind:     DiagnosticKind,
    pub severity: Severity,
    pub location: Option<Location>,
    pub args:     Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: Option<&Location>) -> Self {
        Diagnostic {
            kind,
            severity: kind.severity(),
            location: location.cloned(),
            args:     Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The catalog template with the arguments substituted.
    pub fn message(&self) -> String {
        let mut message = self.kind.message_format().to_string();
        for (i, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{}: {} {}: {}", loc, self.severity, self.id(), self.message()),
            None      => write!(f, "{} {}: {}", self.severity, self.id(), self.message()),
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Diagnostic", 5)?;
        s.serialize_field("id", self.id())?;
        s.serialize_field("severity", &self.severity)?;
        s.serialize_field("message", &self.message())?;
        s.serialize_field("location", &self.location)?;
        s.serialize_field("args", &self.args)?;
        s.end()
    }
}

/// Result of one validation check: either the parsed value, or the value to
/// use instead together with the diagnostic explaining why.
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    Ok(T),
    Defaulted(T, Diagnostic),
}

impl<T> Checked<T> {
    pub fn value(&self) -> &T {
        match self {
            Checked::Ok(v) | Checked::Defaulted(v, _) => v,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Checked::Ok(_) => None,
            Checked::Defaulted(_, d) => Some(d),
        }
    }
}

/// Collects diagnostics in the order they are raised.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records the diagnostic of `checked`, if any, and returns its value.
    pub fn take<T>(&mut self, checked: Checked<T>) -> T {
        match checked {
            Checked::Ok(v) => v,
            Checked::Defaulted(v, d) => {
                self.diagnostics.push(d);
                v
            }
        }
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
