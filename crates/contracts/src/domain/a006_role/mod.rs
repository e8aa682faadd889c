pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Permission, PermissionAction, PermissionModule, Role, RoleDto, RoleId, RoleRegistry};
