use super::aggregate::{Permission, PermissionAction as A, PermissionModule as M, Role, RoleId};
use std::collections::BTreeSet;
use uuid::Uuid;

fn role(id: u128, name: &str, description: &str, permissions: BTreeSet<Permission>, members: &[&str]) -> Role {
    Role {
        id: RoleId::new(Uuid::from_u128(id)),
        name: name.to_string(),
        description: description.to_string(),
        permissions,
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

fn grant(modules: &[M], actions: &[A]) -> BTreeSet<Permission> {
    modules
        .iter()
        .flat_map(|m| actions.iter().map(move |a| Permission::new(*m, *a)))
        .collect()
}

pub fn roles() -> Vec<Role> {
    let entities = [M::Customer, M::SpareParts, M::FinishedGoods];
    vec![
        role(
            1,
            "Administrator",
            "Full access to every module",
            grant(&M::ALL, &A::ALL),
            &["Admin"],
        ),
        role(
            2,
            "Data Steward",
            "Reviews and approves master data requests",
            grant(&entities, &[A::View, A::Edit, A::Approve]),
            &["Linh Nguyen"],
        ),
        role(
            3,
            "Requester",
            "Creates master data requests",
            grant(&entities, &[A::View, A::Create]),
            &["Rina Kusuma", "Andi Pratama"],
        ),
        role(
            4,
            "Finance Approver",
            "Approves customer credit and payment data",
            grant(&[M::Customer], &[A::View, A::Approve]),
            &["Budi Santoso", "Ana Wijaya"],
        ),
    ]
}
