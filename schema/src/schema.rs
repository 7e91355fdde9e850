use crate::{location::Location, value::RawAttribute};
use serde::{Deserialize, Serialize};

/// Declared accessibility of an enumeration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    /// Only public and internal types get accessors.
    pub fn is_eligible(self) -> bool {
        matches!(self, Accessibility::Public | Accessibility::Internal)
    }
}

/// One enumeration member and the metadata attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    pub name:         String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location:     Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude:      Option<RawAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<RawAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix:       Option<RawAttribute>,
    /// Group membership references, in the order they were written.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups:       Vec<RawAttribute>,
}

impl RawMember {
    pub fn new(name: impl Into<String>) -> Self {
        RawMember {
            name:         name.into(),
            location:     None,
            exclude:      None,
            display_name: None,
            prefix:       None,
            groups:       Vec::new(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_exclude(mut self, attr: RawAttribute) -> Self {
        self.exclude = Some(attr);
        self
    }

    pub fn with_display_name(mut self, attr: RawAttribute) -> Self {
        self.display_name = Some(attr);
        self
    }

    pub fn with_prefix(mut self, attr: RawAttribute) -> Self {
        self.prefix = Some(attr);
        self
    }

    pub fn with_group(mut self, attr: RawAttribute) -> Self {
        self.groups.push(attr);
        self
    }
}

/// A resolved enumeration type with all of its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnum {
    pub name:          String,
    /// Enclosing namespace, empty for the global namespace.
    #[serde(default)]
    pub namespace:     String,
    /// Fully-qualified path used to spell member references.
    pub full_name:     String,
    pub accessibility: Accessibility,
    /// Whether the values are independent bits.
    #[serde(default)]
    pub is_flags:      bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude:       Option<RawAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix:        Option<RawAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming:        Option<RawAttribute>,
    /// Group declarations, in the order they were written.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups:        Vec<RawAttribute>,
    #[serde(default)]
    pub members:       Vec<RawMember>,
}

impl RawEnum {
    /// A type named `name` inside `namespace`; the full name is derived.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, accessibility: Accessibility) -> Self {
        let name      = name.into();
        let namespace = namespace.into();
        let full_name = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", namespace, name)
        };
        RawEnum {
            name,
            namespace,
            full_name,
            accessibility,
            is_flags: false,
            exclude:  None,
            prefix:   None,
            naming:   None,
            groups:   Vec::new(),
            members:  Vec::new(),
        }
    }

    pub fn flags(mut self) -> Self {
        self.is_flags = true;
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_exclude(mut self, attr: RawAttribute) -> Self {
        self.exclude = Some(attr);
        self
    }

    pub fn with_prefix(mut self, attr: RawAttribute) -> Self {
        self.prefix = Some(attr);
        self
    }

    pub fn with_naming(mut self, attr: RawAttribute) -> Self {
        self.naming = Some(attr);
        self
    }

    pub fn with_group(mut self, attr: RawAttribute) -> Self {
        self.groups.push(attr);
        self
    }

    pub fn with_member(mut self, member: RawMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn member(&self, name: &str) -> Option<&RawMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// An enumeration declaration found by the host. `symbol` is `None` when the
/// host could not resolve it to a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDeclaration {
    pub name:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub symbol:   Option<RawEnum>,
}

impl EnumDeclaration {
    pub fn resolved(symbol: RawEnum) -> Self {
        EnumDeclaration {
            name:     symbol.name.clone(),
            location: None,
            symbol:   Some(symbol),
        }
    }

    pub fn unresolved(name: impl Into<String>, location: Option<Location>) -> Self {
        EnumDeclaration {
            name: name.into(),
            location,
            symbol: None,
        }
    }
}

/// Everything one generation pass sees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    /// Project-wide naming preference, overridden per type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<RawAttribute>,
    #[serde(default)]
    pub enums:  Vec<EnumDeclaration>,
}
