use serde::{Deserialize, Serialize};
use std::fmt;

/// Master-data entity a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Customer,
    SpareParts,
    FinishedGoods,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Customer,
        EntityKind::SpareParts,
        EntityKind::FinishedGoods,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::SpareParts => "Spare Parts",
            Self::FinishedGoods => "Finished Goods",
        }
    }

    /// URL form (`#requests?entity=spare-parts`)
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::SpareParts => "spare-parts",
            Self::FinishedGoods => "finished-goods",
        }
    }

    /// Tag used inside request ids (`REQ-SPARE-0001`)
    pub fn id_tag(&self) -> &'static str {
        match self {
            Self::Customer => "CUST",
            Self::SpareParts => "SPARE",
            Self::FinishedGoods => "FINISHED",
        }
    }

    /// Accepts the label or the slug, case-insensitively.
    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(value) || e.slug().eq_ignore_ascii_case(value))
    }

    /// Explicit tag when present, otherwise guessed from the request id.
    pub fn infer(request_id: &str, explicit: Option<EntityKind>) -> EntityKind {
        if let Some(entity) = explicit {
            return entity;
        }
        if request_id.contains("SPARE") {
            EntityKind::SpareParts
        } else if request_id.contains("FINISHED") {
            EntityKind::FinishedGoods
        } else {
            EntityKind::Customer
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(EntityKind::from_param("Customer"), Some(EntityKind::Customer));
        assert_eq!(EntityKind::from_param("spare-parts"), Some(EntityKind::SpareParts));
        assert_eq!(EntityKind::from_param("finished goods"), Some(EntityKind::FinishedGoods));
        assert_eq!(EntityKind::from_param("vendors"), None);
    }

    #[test]
    fn test_infer_from_id() {
        assert_eq!(EntityKind::infer("REQ-SPARE-0001", None), EntityKind::SpareParts);
        assert_eq!(EntityKind::infer("REQ-FINISHED-0001", None), EntityKind::FinishedGoods);
        assert_eq!(EntityKind::infer("REQ-0001", None), EntityKind::Customer);
        assert_eq!(
            EntityKind::infer("REQ-SPARE-0001", Some(EntityKind::Customer)),
            EntityKind::Customer
        );
    }
}
