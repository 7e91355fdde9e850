//! Accessor generation.
//!
//! A descriptor is first lowered to a list of [`Accessor`]s (names plus the
//! members they test). Method-style and property-style output are two
//! [`AccessorRenderer`]s over that same list, so both spellings always
//! agree on names and expressions.

use crate::{
    error::FlagExtError,
    ident::is_valid_identifier,
    naming::convert,
    types::EnumDescriptor,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const AUTOGEN_HEADER: &str = "// <auto-generated/>";
pub const DEFAULT_PROPERTY_GUARD: &str = "NET10_0_OR_GREATER";
pub const DEFAULT_RECEIVER: &str = "value";

/// Generation-time configuration. Every field has a default, so a partial
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Emit `Get…(this T value)` extension methods.
    pub methods:        bool,
    /// Emit extension-block properties.
    pub properties:     bool,
    /// Preprocessor symbol the property block is wrapped in; `None` emits it
    /// unconditionally.
    pub property_guard: Option<String>,
    /// Name of the receiver parameter in generated code.
    pub receiver:       String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            methods:        true,
            properties:     true,
            property_guard: Some(DEFAULT_PROPERTY_GUARD.to_string()),
            receiver:       DEFAULT_RECEIVER.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> Result<(), FlagExtError> {
        if !self.methods && !self.properties {
            return Err(FlagExtError::InvalidConfig(
                "methods and properties are both disabled".to_string(),
            ));
        }
        if !is_valid_identifier(&self.receiver) {
            return Err(FlagExtError::InvalidConfig(format!(
                "receiver {:?} is not a valid identifier",
                self.receiver
            )));
        }
        if let Some(guard) = &self.property_guard {
            if !is_valid_identifier(guard) {
                return Err(FlagExtError::InvalidConfig(format!(
                    "property guard {:?} is not a valid identifier",
                    guard
                )));
            }
        }
        Ok(())
    }

    fn renderers(&self) -> Vec<Box<dyn AccessorRenderer>> {
        let mut renderers: Vec<Box<dyn AccessorRenderer>> = Vec::new();
        if self.methods {
            renderers.push(Box::new(MethodRenderer));
        }
        if self.properties {
            renderers.push(Box::new(PropertyRenderer {
                guard: self.property_guard.clone(),
            }));
        }
        renderers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessorSubject {
    Flag,
    Group,
}

/// One logical accessor: a name and the members whose presence it tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    pub name:    String,
    pub subject: AccessorSubject,
    /// Member name for flag accessors, group name for group accessors.
    pub label:   String,
    pub members: Vec<String>,
}

impl Accessor {
    fn summary(&self, is_flags: bool) -> String {
        match (self.subject, is_flags) {
            (AccessorSubject::Flag, true)  => format!("Returns true if the '{}' flag is set in the value.", self.label),
            (AccessorSubject::Flag, false) => format!("Returns true if the value is '{}'.", self.label),
            (AccessorSubject::Group, _)    => format!("Returns true if the value is a member of the '{}' group.", self.label),
        }
    }

    /// Bit tests joined with `||` for flag-shaped types, an equality or
    /// `is … or …` pattern otherwise.
    fn expression(&self, target: &RenderTarget) -> String {
        let member = |m: &String| format!("{}.{}", target.full_name, m);

        if target.is_flags {
            return self
                .members
                .iter()
                .map(|m| format!("{}.HasFlag({})", target.receiver, member(m)))
                .collect::<Vec<_>>()
                .join(" || ");
        }

        match (self.subject, self.members.as_slice()) {
            (AccessorSubject::Flag, [single]) => format!("{} == {}", target.receiver, member(single)),
            _ => format!(
                "{} is {}",
                target.receiver,
                self.members.iter().map(member).collect::<Vec<_>>().join(" or ")
            ),
        }
    }
}

/// Lowers a descriptor to its accessors: flags in member order, then
/// groups in declaration order. Excluded flags and empty groups produce
/// nothing.
pub fn accessors(desc: &EnumDescriptor) -> Vec<Accessor> {
    let flags = desc.flags.iter().filter(|f| !f.exclude).map(|f| Accessor {
        name:    format!("{}{}", f.prefix_or(&desc.prefix), convert(f.accessor_name(), &desc.naming)),
        subject: AccessorSubject::Flag,
        label:   f.name.clone(),
        members: vec![f.name.clone()],
    });

    let groups = desc.groups.iter().filter(|g| !g.members.is_empty()).map(|g| Accessor {
        name:    format!("{}{}", g.prefix, convert(&g.name, &desc.naming)),
        subject: AccessorSubject::Group,
        label:   g.name.clone(),
        members: g.members.clone(),
    });

    flags.chain(groups).collect()
}

/// What a renderer needs to know about the type being extended.
#[derive(Debug, Clone, Copy)]
pub struct RenderTarget<'a> {
    pub access:    &'static str,
    pub full_name: &'a str,
    pub receiver:  &'a str,
    pub is_flags:  bool,
}

/// One textual rendering of the accessor list, as lines inside the
/// extension class body.
pub trait AccessorRenderer {
    fn render(&self, target: &RenderTarget, accessors: &[Accessor]) -> Vec<String>;
}

/// `public static bool GetHasA(this T value) => …;`
pub struct MethodRenderer;

impl AccessorRenderer for MethodRenderer {
    fn render(&self, target: &RenderTarget, accessors: &[Accessor]) -> Vec<String> {
        let mut lines = Vec::new();
        for accessor in accessors {
            lines.push("".to_string());
            lines.push("    /// <summary>".to_string());
            lines.push(format!("    /// {}", accessor.summary(target.is_flags)));
            lines.push("    /// </summary>".to_string());
            lines.push("    [Pure]".to_string());
            lines.push("    [MethodImpl(MethodImplOptions.AggressiveInlining)]".to_string());
            lines.push(format!(
                "    {} static bool Get{}(this {} {})",
                target.access, accessor.name, target.full_name, target.receiver
            ));
            lines.push(format!("        => {};", accessor.expression(target)));
        }
        lines
    }
}

/// `extension(T value) { public bool HasA => …; }`, optionally behind a
/// preprocessor guard.
pub struct PropertyRenderer {
    pub guard: Option<String>,
}

impl AccessorRenderer for PropertyRenderer {
    fn render(&self, target: &RenderTarget, accessors: &[Accessor]) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push("".to_string());
        if let Some(guard) = &self.guard {
            lines.push(format!("#if {}", guard));
            lines.push("".to_string());
        }
        lines.push(format!("    extension({} {}) {{", target.full_name, target.receiver));

        for accessor in accessors {
            lines.push("".to_string());
            lines.push("        /// <summary>".to_string());
            lines.push(format!("        /// {}", accessor.summary(target.is_flags)));
            lines.push("        /// </summary>".to_string());
            lines.push(format!("        {} bool {}", target.access, accessor.name));
            lines.push(format!("            => {};", accessor.expression(target)));
        }

        lines.push("    }".to_string());
        if self.guard.is_some() {
            lines.push("".to_string());
            lines.push("#endif".to_string());
        }
        lines
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// File name the host should register the text under.
    pub hint_name: String,
    pub type_name: String,
    pub text:      String,
}

/// Renders the extension class for `desc`. Returns `None` when the type has
/// no accessors to offer or the options enable no rendering.
pub fn generate(desc: &EnumDescriptor, options: &GeneratorOptions) -> Option<GeneratedUnit> {
    let accessors = accessors(desc);
    let renderers = options.renderers();
    if accessors.is_empty() || renderers.is_empty() {
        debug!("nothing to generate for {}", desc.full_name);
        return None;
    }

    let type_name = desc.extension_type_name();
    let target = RenderTarget {
        access:    desc.access_modifier(),
        full_name: &desc.full_name,
        receiver:  &options.receiver,
        is_flags:  desc.is_flags,
    };

    let mut code: Vec<String> = Vec::new();
    code.push(AUTOGEN_HEADER.to_string());
    code.push("".to_string());
    code.push("using System.Diagnostics.Contracts;".to_string());
    code.push("using System.Runtime.CompilerServices;".to_string());
    code.push("".to_string());

    if !desc.namespace.is_empty() {
        code.push(format!("namespace {};", desc.namespace));
        code.push("".to_string());
    }

    code.push(format!("{} static partial class {} {{", target.access, type_name));
    for renderer in renderers {
        code.extend(renderer.render(&target, &accessors));
    }
    code.push("}".to_string());
    code.push("".to_string());

    debug!("generated {} accessors for {}", accessors.len(), desc.full_name);

    Some(GeneratedUnit {
        hint_name: format!("{}.g.cs", type_name),
        type_name,
        text: code.join("\n"),
    })
}
