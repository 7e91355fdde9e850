//! Corrective edits for unknown group references.
//!
//! Each fix is a single edit over the raw metadata and can be applied on its
//! own; applying one never requires the other.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use flagext_schema::{RawAttribute, RawEnum, RawValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FixEdit {
    /// Append a declaration for `group` to the type.
    AddGroupDeclaration { group: String },
    /// Drop the membership attribute at `index` from `member`.
    RemoveMembership { member: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeFix {
    pub title:           &'static str,
    pub equivalence_key: &'static str,
    pub edit:            FixEdit,
}

impl CodeFix {
    /// Returns the edited metadata. An edit whose target no longer exists
    /// leaves the metadata unchanged.
    pub fn apply(&self, raw: &RawEnum) -> RawEnum {
        let mut edited = raw.clone();

        match &self.edit {
            FixEdit::AddGroupDeclaration { group } => {
                edited.groups.push(RawAttribute::new(vec![RawValue::Str(group.clone())]));
            }
            FixEdit::RemoveMembership { member, index } => {
                if let Some(m) = edited.members.iter_mut().find(|m| &m.name == member) {
                    if *index < m.groups.len() {
                        m.groups.remove(*index);
                    }
                }
            }
        }

        edited
    }
}

/// The fixes offered for `diagnostic` raised on `raw`: exactly two for an
/// unknown group reference that can be located, none otherwise. A group
/// that `raw` already declares is not unknown there, so it gets none.
pub fn fixes_for(diagnostic: &Diagnostic, raw: &RawEnum) -> Vec<CodeFix> {
    if diagnostic.kind != DiagnosticKind::UnknownGroupName {
        return Vec::new();
    }
    let Some(group) = diagnostic.args.first() else {
        return Vec::new();
    };
    if declares(raw, group) {
        return Vec::new();
    }
    let Some((member, index)) = find_membership(raw, group, diagnostic) else {
        return Vec::new();
    };

    vec![
        CodeFix {
            title:           "Add group to enum",
            equivalence_key: "AddGroupToEnum",
            edit:            FixEdit::AddGroupDeclaration { group: group.clone() },
        },
        CodeFix {
            title:           "Remove group from field",
            equivalence_key: "RemoveGroupFromField",
            edit:            FixEdit::RemoveMembership { member, index },
        },
    ]
}

fn declares(raw: &RawEnum, group: &str) -> bool {
    raw.groups
        .iter()
        .any(|attr| matches!(attr.arg(0), Some(RawValue::Str(name)) if name == group))
}

/// Locates the offending membership, by location when the diagnostic has
/// one, otherwise the first reference to `group`.
fn find_membership(raw: &RawEnum, group: &str, diagnostic: &Diagnostic) -> Option<(String, usize)> {
    raw.members.iter().find_map(|member| {
        member
            .groups
            .iter()
            .position(|attr| {
                let same_name = matches!(attr.args.as_slice(), [RawValue::Str(name)] if name == group);
                let same_place = diagnostic.location.is_none() || attr.location == diagnostic.location;
                same_name && same_place
            })
            .map(|index| (member.name.clone(), index))
    })
}
