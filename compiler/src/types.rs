use crate::naming::EnumNaming;
use flagext_schema::Accessibility;
use serde::Serialize;

pub const DEFAULT_FLAG_PREFIX: &str = "Has";
pub const DEFAULT_GROUP_PREFIX: &str = "Is";

/// A validated enumeration type, ready for generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDescriptor {
    pub name:          String,
    pub namespace:     String,
    pub full_name:     String,
    pub accessibility: Accessibility,
    pub is_flags:      bool,
    pub prefix:        String,
    pub naming:        EnumNaming,
    pub flags:         Vec<FlagDescriptor>,
    pub groups:        Vec<GroupDescriptor>,
}

impl EnumDescriptor {
    pub fn extension_type_name(&self) -> String {
        format!("{}Extensions", self.name)
    }

    /// Access modifier spelled the way the generated code needs it.
    pub fn access_modifier(&self) -> &'static str {
        match self.accessibility {
            Accessibility::Public => "public",
            _ => "internal",
        }
    }

    pub fn flag(&self, name: &str) -> Option<&FlagDescriptor> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&GroupDescriptor> {
        self.groups.iter().find(|g| g.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagDescriptor {
    pub name:         String,
    pub display_name: Option<String>,
    pub exclude:      bool,
    /// Overrides the type-level prefix for this member only.
    pub prefix:       Option<String>,
    /// Declared groups this member belongs to.
    pub groups:       Vec<String>,
}

impl FlagDescriptor {
    /// Display name override, or the member's own name.
    pub fn accessor_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn prefix_or<'a>(&'a self, type_prefix: &'a str) -> &'a str {
        self.prefix.as_deref().unwrap_or(type_prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDescriptor {
    pub name:    String,
    pub prefix:  String,
    /// Member names in declaration order.
    pub members: Vec<String>,
}
