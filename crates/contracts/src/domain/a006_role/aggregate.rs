use crate::domain::common::AggregateId;
use crate::shared::form::FormErrors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(pub Uuid);

impl RoleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for RoleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RoleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Permissions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PermissionModule {
    Customer,
    SpareParts,
    FinishedGoods,
    Workflow,
    Roles,
}

impl PermissionModule {
    pub const ALL: [PermissionModule; 5] = [
        PermissionModule::Customer,
        PermissionModule::SpareParts,
        PermissionModule::FinishedGoods,
        PermissionModule::Workflow,
        PermissionModule::Roles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::SpareParts => "Spare Parts",
            Self::FinishedGoods => "Finished Goods",
            Self::Workflow => "Workflow",
            Self::Roles => "Roles",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Approve,
    Delete,
}

impl PermissionAction {
    pub const ALL: [PermissionAction; 5] = [
        PermissionAction::View,
        PermissionAction::Create,
        PermissionAction::Edit,
        PermissionAction::Approve,
        PermissionAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Create => "Create",
            Self::Edit => "Edit",
            Self::Approve => "Approve",
            Self::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    pub module: PermissionModule,
    pub action: PermissionAction,
}

impl Permission {
    pub fn new(module: PermissionModule, action: PermissionAction) -> Self {
        Self { module, action }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub permissions: BTreeSet<Permission>,
    pub members: Vec<String>,
}

/// Editable part of a role (create / update form)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    pub name: String,
    pub description: String,
}

impl RoleDto {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Role name is required");
        }
        errors
    }
}

/// All roles, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    roles: Vec<Role>,
}

impl RoleRegistry {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    fn name_taken(&self, name: &str, except: Option<RoleId>) -> bool {
        let name = name.trim();
        self.roles
            .iter()
            .any(|r| Some(r.id) != except && r.name.trim().eq_ignore_ascii_case(name))
    }

    fn check(&self, dto: &RoleDto, except: Option<RoleId>) -> Result<(), FormErrors> {
        let mut errors = dto.validate();
        if errors.get("name").is_none() && self.name_taken(&dto.name, except) {
            errors.insert("name", format!("Role '{}' already exists", dto.name.trim()));
        }
        errors.into_result()
    }

    pub fn create(&mut self, dto: &RoleDto) -> Result<RoleId, FormErrors> {
        self.check(dto, None)?;
        let id = RoleId::new_v4();
        self.roles.push(Role {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            permissions: BTreeSet::new(),
            members: Vec::new(),
        });
        log::info!("role '{}' created", dto.name.trim());
        Ok(id)
    }

    pub fn update(&mut self, id: RoleId, dto: &RoleDto) -> Result<(), FormErrors> {
        self.check(dto, Some(id))?;
        let Some(role) = self.roles.iter_mut().find(|r| r.id == id) else {
            let mut errors = FormErrors::new();
            errors.insert("name", "Role no longer exists");
            return Err(errors);
        };
        role.name = dto.name.trim().to_string();
        role.description = dto.description.trim().to_string();
        Ok(())
    }

    pub fn delete(&mut self, id: RoleId) -> Option<Role> {
        let idx = self.roles.iter().position(|r| r.id == id)?;
        Some(self.roles.remove(idx))
    }

    /// Returns the new state of the permission
    pub fn toggle_permission(&mut self, id: RoleId, permission: Permission) -> Option<bool> {
        let role = self.roles.iter_mut().find(|r| r.id == id)?;
        if role.permissions.remove(&permission) {
            Some(false)
        } else {
            role.permissions.insert(permission);
            Some(true)
        }
    }

    pub fn has_permission(&self, id: RoleId, permission: Permission) -> bool {
        self.get(id)
            .map(|r| r.permissions.contains(&permission))
            .unwrap_or(false)
    }

    pub fn add_member(&mut self, id: RoleId, member: &str) -> bool {
        let member = member.trim();
        let Some(role) = self.roles.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if member.is_empty() || role.members.iter().any(|m| m == member) {
            return false;
        }
        role.members.push(member.to_string());
        true
    }

    pub fn remove_member(&mut self, id: RoleId, member: &str) -> bool {
        let Some(role) = self.roles.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        let before = role.members.len();
        role.members.retain(|m| m != member);
        role.members.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_role::fixtures::roles;

    fn dto(name: &str) -> RoleDto {
        RoleDto {
            name: name.into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_create_requires_name() {
        let mut registry = RoleRegistry::default();
        let errors = registry.create(&dto("  ")).unwrap_err();
        assert_eq!(errors.get("name"), Some("Role name is required"));
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        let mut registry = RoleRegistry::new(roles());
        let existing = registry.roles()[0].name.to_uppercase();
        let errors = registry.create(&dto(&existing)).unwrap_err();
        assert!(errors.get("name").unwrap().contains("already exists"));

        let id = registry.create(&dto("Auditor")).unwrap();
        assert!(registry.update(id, &dto("auditor")).is_ok(), "renaming to itself is fine");
        assert!(registry.update(id, &dto(&existing)).is_err());
    }

    #[test]
    fn test_toggle_permission() {
        let mut registry = RoleRegistry::default();
        let id = registry.create(&dto("Viewer")).unwrap();
        let perm = Permission::new(PermissionModule::Workflow, PermissionAction::View);

        assert!(!registry.has_permission(id, perm));
        assert_eq!(registry.toggle_permission(id, perm), Some(true));
        assert!(registry.has_permission(id, perm));
        assert_eq!(registry.toggle_permission(id, perm), Some(false));
        assert!(!registry.has_permission(id, perm));
        assert_eq!(registry.toggle_permission(RoleId::new_v4(), perm), None);
    }

    #[test]
    fn test_members_and_delete() {
        let mut registry = RoleRegistry::default();
        let id = registry.create(&dto("Approver")).unwrap();
        assert!(registry.add_member(id, "Linh Nguyen"));
        assert!(!registry.add_member(id, "Linh Nguyen"));
        assert!(registry.remove_member(id, "Linh Nguyen"));
        assert!(!registry.remove_member(id, "Linh Nguyen"));

        assert!(registry.delete(id).is_some());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_role_id_round_trip_string() {
        let id = RoleId::new_v4();
        assert_eq!(RoleId::from_string(&id.as_string()), Ok(id));
        assert!(RoleId::from_string("nope").is_err());
    }
}
