//! flagext
//!
//! Runs a whole generation pass over a compilation.
//!
//! - `run_pass`: analysis and generation for every declared type, merged
//!   in input order, cancellable between types
//! - JSON helpers for hosts that hand metadata over as text

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use flagext_compiler::{analyze_declaration, analyze_project_naming, generate};
use serde::Serialize;
use tracing::{debug, info};

pub use flagext_compiler::{Diagnostic, DiagnosticKind, FlagExtError, GeneratedUnit, GeneratorOptions, Severity};
pub use flagext_schema::{Compilation, EnumDeclaration, RawEnum};

pub mod quickfix {
    pub use flagext_compiler::quickfix::{fixes_for, CodeFix, FixEdit};
}

/// Cooperative cancellation flag shared between a pass and its caller.
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Diagnostics raised for one declaration of the compilation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeReport {
    /// Position of the declaration in `Compilation::enums`.
    pub index:       usize,
    pub name:        String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Everything one pass produced. Units are in declaration order; the
/// project-level diagnostics come first, then each type's in turn.
/// `types` holds the same per-type diagnostics keyed by declaration, for
/// declarations that raised any.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassOutput {
    pub units:       Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
    pub types:       Vec<TypeReport>,
}

impl PassOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Quick fixes for each diagnostic, offered against the type that
    /// raised it.
    pub fn fixes<'a>(&'a self, compilation: &Compilation) -> Vec<(&'a Diagnostic, quickfix::CodeFix)> {
        let mut fixes = Vec::new();
        for report in &self.types {
            let Some(raw) = compilation.enums.get(report.index).and_then(|d| d.symbol.as_ref()) else {
                continue;
            };
            for diagnostic in &report.diagnostics {
                fixes.extend(quickfix::fixes_for(diagnostic, raw).into_iter().map(|fix| (diagnostic, fix)));
            }
        }
        fixes
    }
}

/// Analyzes and generates every type in `compilation`.
///
/// The token is checked before each type; a type that has started is always
/// finished. Cancellation discards partial output.
pub fn run_pass(
    compilation: &Compilation,
    options:     &GeneratorOptions,
    cancel:      &CancellationToken,
) -> Result<PassOutput, FlagExtError> {
    options.validate()?;

    let (project_naming, mut diagnostics) = analyze_project_naming(compilation.naming.as_ref());
    let mut units = Vec::new();
    let mut types = Vec::new();

    for (index, decl) in compilation.enums.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!("pass cancelled before {}", decl.name);
            return Err(FlagExtError::Cancelled);
        }

        let analysis = analyze_declaration(decl, project_naming);
        if let Some(unit) = analysis.descriptor.as_ref().and_then(|d| generate(d, options)) {
            units.push(unit);
        }
        if !analysis.diagnostics.is_empty() {
            diagnostics.extend(analysis.diagnostics.iter().cloned());
            types.push(TypeReport {
                index,
                name: decl.name.clone(),
                diagnostics: analysis.diagnostics,
            });
        }
    }

    info!(
        "pass complete: {} type(s), {} unit(s), {} diagnostic(s)",
        compilation.enums.len(),
        units.len(),
        diagnostics.len()
    );

    Ok(PassOutput { units, diagnostics, types })
}

/// Parses a compilation from its JSON form.
pub fn compilation_from_json(text: &str) -> Result<Compilation, FlagExtError> {
    Ok(serde_json::from_str(text)?)
}

/// Renders diagnostics as a pretty-printed JSON array.
pub fn diagnostics_to_json(diagnostics: &[Diagnostic]) -> Result<String, FlagExtError> {
    Ok(serde_json::to_string_pretty(diagnostics)?)
}
