//! Labels written by the CRUD layer for each mutating operation.

use std::fmt;

/// A mutating operation on a managed resource, keyed by the resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    /// A pet was created.
    CreatePet(i64),
    /// A pet was updated.
    UpdatePet(i64),
    /// A pet was deleted.
    DeletePet(i64),
    /// A user profile was updated.
    UpdateUser(i64),
    /// A user was deleted.
    DeleteUser(i64),
}

impl ActionLabel {
    /// The verb part of the label.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::CreatePet(_) => "CREATE_PET",
            Self::UpdatePet(_) => "UPDATE_PET",
            Self::DeletePet(_) => "DELETE_PET",
            Self::UpdateUser(_) => "UPDATE_USER",
            Self::DeleteUser(_) => "DELETE_USER",
        }
    }

    /// The id of the resource the action touched.
    pub fn resource_id(&self) -> i64 {
        match *self {
            Self::CreatePet(id)
            | Self::UpdatePet(id)
            | Self::DeletePet(id)
            | Self::UpdateUser(id)
            | Self::DeleteUser(id) => id,
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.resource_id())
    }
}

impl From<ActionLabel> for String {
    fn from(label: ActionLabel) -> Self {
        label.to_string()
    }
}
