//! Admin role-list state shared across the roles screens.
//!
//! DESIGN
//! ======
//! The collection lives in a context-provided `RwSignal<RolesState>` so the
//! list page and the create dialog see the same data. The page's `loading`
//! flag is not stored here; it belongs to one activation of the page.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

pub use crate::net::types::Role;

/// Role collection as last returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RolesState {
    pub data: Vec<Role>,
}

impl RolesState {
    /// Replace the whole collection. Server order is kept as-is.
    pub fn set_roles(&mut self, roles: Vec<Role>) {
        self.data = roles;
    }

    /// Add a freshly created role at the end of the list.
    pub fn append_role(&mut self, role: Role) {
        self.data.push(role);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What the role list should draw for a given `loading` flag and collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleListViewState {
    Loading,
    Empty,
    Populated(Vec<Role>),
}

impl RoleListViewState {
    pub fn resolve(loading: bool, roles: &[Role]) -> Self {
        if loading {
            Self::Loading
        } else if roles.is_empty() {
            Self::Empty
        } else {
            Self::Populated(roles.to_vec())
        }
    }
}
