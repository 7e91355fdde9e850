//! flagext-compiler
//!
//! This crate implements:
//!  1) An identifier validator and a naming case converter,
//!  2) The diagnostic catalog (`DiagnosticKind`) and `Diagnostic` values,
//!  3) The descriptor analyzer: per-field checks, flags, group declarations
//!     and memberships (`analyze_enum` → `EnumAnalysis`),
//!  4) Accessor generation (`generate` → `GeneratedUnit`),
//!  5) Quick fixes for unknown group references, and the `FlagExtError` type.

pub mod error;
pub mod types;
pub mod ident;
pub mod naming;
pub mod diagnostics;
pub mod checks;
pub mod groups;
pub mod analyzer;
pub mod generator;
pub mod quickfix;

pub use analyzer::{analyze_declaration, analyze_enum, analyze_project_naming, EnumAnalysis};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::FlagExtError;
pub use generator::{generate, GeneratedUnit, GeneratorOptions};
pub use ident::is_valid_identifier;
pub use naming::{convert, EnumNaming, NamingCase};
pub use types::{EnumDescriptor, FlagDescriptor, GroupDescriptor};

/// Analyzes and generates one type: the generated unit, if any, and every
/// diagnostic raised for it.
pub fn generate_enum(
    raw:            &flagext_schema::RawEnum,
    project_naming: Option<EnumNaming>,
    options:        &GeneratorOptions,
) -> (Option<GeneratedUnit>, Vec<Diagnostic>) {
    let analysis = analyze_enum(raw, project_naming);
    let unit = analysis.descriptor.as_ref().and_then(|d| generate(d, options));
    (unit, analysis.diagnostics)
}
