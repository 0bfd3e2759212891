//! Casdoor entities and their typed operations.
//!
//! Reads are scoped to the configured organization. Writes go through the
//! `modify_*` helpers, which stamp that organization as the entity owner
//! before the entity is serialized.

pub mod models;
pub mod permission;
pub mod resource;
pub mod role;
pub mod user;

pub use models::{Permission, Resource, Role, User};

/// Anything addressed on the server by `owner` and `name`.
pub trait Entity: Clone + serde::Serialize {
    fn owner(&self) -> &str;

    fn name(&self) -> &str;

    fn set_owner(&mut self, owner: &str);

    /// Composite `"<owner>/<name>"` identifier.
    fn resource_id(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn owner(&self) -> &str {
                    &self.owner
                }

                fn name(&self) -> &str {
                    &self.name
                }

                fn set_owner(&mut self, owner: &str) {
                    self.owner = owner.to_string();
                }
            }
        )*
    };
}

impl_entity!(User, Role, Permission, Resource);

/// `"<organization>/<name>"`, the id form single-entity reads expect.
pub(crate) fn scoped_id(organization: &str, name: &str) -> String {
    format!("{}/{}", organization, name)
}
