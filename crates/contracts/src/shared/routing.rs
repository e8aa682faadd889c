//! URL-hash routing: `#routeName?key=value&...`

use crate::domain::common::{EntityKind, RequestType};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),
    #[error("route '{route}' needs parameter '{param}'")]
    MissingParam { route: &'static str, param: &'static str },
    #[error("invalid value '{value}' for parameter '{param}'")]
    InvalidParam { param: &'static str, value: String },
}

// ============================================================================
// Raw hash
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashRoute {
    pub name: String,
    pub params: BTreeMap<String, String>,
}

impl HashRoute {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Accepts the hash with or without the leading `#`. Each `key=value`
    /// pair is decoded on its own; a malformed pair is dropped with a
    /// warning and the rest are kept.
    pub fn parse(hash: &str) -> Self {
        let hash = hash.trim().trim_start_matches('#');
        let (name, query) = match hash.split_once('?') {
            Some((name, query)) => (name, query),
            None => (hash, ""),
        };

        let mut params = BTreeMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            match serde_qs::from_str::<BTreeMap<String, String>>(pair) {
                Ok(decoded) => params.extend(decoded),
                Err(e) => log::warn!("ignoring malformed route parameter '{}': {}", pair, e),
            }
        }

        Self {
            name: name.trim_end_matches('/').to_string(),
            params,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn to_hash(&self) -> String {
        if self.params.is_empty() {
            return format!("#{}", self.name);
        }
        match serde_qs::to_string(&self.params) {
            Ok(query) => format!("#{}?{}", self.name, query),
            Err(e) => {
                log::warn!("cannot encode route params: {}", e);
                format!("#{}", self.name)
            }
        }
    }
}

// ============================================================================
// Typed routes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Requests {
        entity: Option<EntityKind>,
    },
    RequestNew {
        entity: EntityKind,
        request_type: RequestType,
        source: Option<String>,
    },
    RequestView {
        id: String,
    },
    Approvals,
    MasterData {
        entity: EntityKind,
    },
    Workflows,
    WorkflowEdit {
        id: Option<u32>,
        country: String,
        entity: EntityKind,
    },
    Roles,
}

fn entity_param(route: &HashRoute) -> Result<Option<EntityKind>, RouteError> {
    route
        .param("entity")
        .map(|v| {
            EntityKind::from_param(v).ok_or_else(|| RouteError::InvalidParam {
                param: "entity",
                value: v.to_string(),
            })
        })
        .transpose()
}

impl AppRoute {
    pub fn from_hash_route(route: &HashRoute) -> Result<Self, RouteError> {
        let parsed = match route.name.as_str() {
            "" | "requests" => AppRoute::Requests {
                entity: entity_param(route)?,
            },
            "request-new" => {
                let request_type = match route.param("type") {
                    None => RequestType::New,
                    Some(v) => RequestType::from_param(v).ok_or_else(|| RouteError::InvalidParam {
                        param: "type",
                        value: v.to_string(),
                    })?,
                };
                AppRoute::RequestNew {
                    entity: entity_param(route)?.unwrap_or(EntityKind::Customer),
                    request_type,
                    source: route.param("source").map(str::to_string),
                }
            }
            "request" => AppRoute::RequestView {
                id: route
                    .param("id")
                    .ok_or(RouteError::MissingParam {
                        route: "request",
                        param: "id",
                    })?
                    .to_string(),
            },
            "approvals" => AppRoute::Approvals,
            "master-data" => AppRoute::MasterData {
                entity: entity_param(route)?.unwrap_or(EntityKind::Customer),
            },
            "workflows" => AppRoute::Workflows,
            "workflow-edit" => {
                let id = match route.param("id") {
                    None => None,
                    Some(v) => Some(v.trim().parse::<u32>().map_err(|_| RouteError::InvalidParam {
                        param: "id",
                        value: v.to_string(),
                    })?),
                };
                AppRoute::WorkflowEdit {
                    id,
                    country: route.param("country").unwrap_or("Indonesia").to_string(),
                    entity: entity_param(route)?.unwrap_or(EntityKind::Customer),
                }
            }
            "roles" => AppRoute::Roles,
            other => return Err(RouteError::Unknown(other.to_string())),
        };
        Ok(parsed)
    }

    pub fn from_hash(hash: &str) -> Result<Self, RouteError> {
        Self::from_hash_route(&HashRoute::parse(hash))
    }

    /// Parses `hash`, falling back to `default_route` and then to the
    /// request list.
    pub fn resolve(hash: &str, default_route: &str) -> Self {
        Self::from_hash(hash).unwrap_or_else(|e| {
            log::warn!("{}, falling back to '{}'", e, default_route);
            Self::from_hash(default_route).unwrap_or(AppRoute::Requests { entity: None })
        })
    }

    pub fn to_hash_route(&self) -> HashRoute {
        match self {
            AppRoute::Requests { entity } => {
                let route = HashRoute::new("requests");
                match entity {
                    Some(e) => route.with_param("entity", e.slug()),
                    None => route,
                }
            }
            AppRoute::RequestNew {
                entity,
                request_type,
                source,
            } => {
                let route = HashRoute::new("request-new")
                    .with_param("entity", entity.slug())
                    .with_param("type", request_type.as_str());
                match source {
                    Some(s) => route.with_param("source", s.as_str()),
                    None => route,
                }
            }
            AppRoute::RequestView { id } => HashRoute::new("request").with_param("id", id.as_str()),
            AppRoute::Approvals => HashRoute::new("approvals"),
            AppRoute::MasterData { entity } => {
                HashRoute::new("master-data").with_param("entity", entity.slug())
            }
            AppRoute::Workflows => HashRoute::new("workflows"),
            AppRoute::WorkflowEdit { id, country, entity } => {
                let route = HashRoute::new("workflow-edit")
                    .with_param("country", country.as_str())
                    .with_param("entity", entity.label());
                match id {
                    Some(id) => route.with_param("id", id.to_string()),
                    None => route,
                }
            }
            AppRoute::Roles => HashRoute::new("roles"),
        }
    }

    pub fn to_hash(&self) -> String {
        self.to_hash_route().to_hash()
    }

    pub fn title(&self) -> String {
        match self {
            AppRoute::Requests { entity: Some(e) } => format!("{} Requests", e.label()),
            AppRoute::Requests { entity: None } => "All Requests".to_string(),
            AppRoute::RequestNew {
                entity,
                request_type,
                ..
            } => format!("{} {} Request", request_type, entity.label()),
            AppRoute::RequestView { id } => id.clone(),
            AppRoute::Approvals => "My Approvals".to_string(),
            AppRoute::MasterData { entity } => entity.label().to_string(),
            AppRoute::Workflows => "Workflows".to_string(),
            AppRoute::WorkflowEdit { id: Some(_), .. } => "Edit Workflow".to_string(),
            AppRoute::WorkflowEdit { id: None, .. } => "New Workflow".to_string(),
            AppRoute::Roles => "Roles & Permissions".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workflow_edit() {
        let route = AppRoute::from_hash("#workflow-edit?id=1&country=Vietnam&entity=Customer").unwrap();
        assert_eq!(
            route,
            AppRoute::WorkflowEdit {
                id: Some(1),
                country: "Vietnam".into(),
                entity: EntityKind::Customer,
            }
        );
    }

    #[test]
    fn test_hash_route_parts() {
        let route = HashRoute::parse("#requests?entity=spare-parts");
        assert_eq!(route.name, "requests");
        assert_eq!(route.param("entity"), Some("spare-parts"));
        assert_eq!(route.param("missing"), None);

        let bare = HashRoute::parse("approvals");
        assert_eq!(bare.name, "approvals");
        assert!(bare.params.is_empty());
    }

    #[test]
    fn test_malformed_pair_keeps_the_others() {
        let route = HashRoute::parse("#requests?entity=customer&x[y]=1");
        assert_eq!(route.name, "requests");
        assert_eq!(route.param("entity"), Some("customer"));
        assert!(!route.params.contains_key("x"));
        assert_eq!(
            AppRoute::from_hash("#requests?entity=customer&x[y]=1").unwrap(),
            AppRoute::Requests {
                entity: Some(EntityKind::Customer)
            }
        );

        let spaced = HashRoute::parse("#workflow-edit?country=South%20Korea&&id=2");
        assert_eq!(spaced.param("country"), Some("South Korea"));
        assert_eq!(spaced.param("id"), Some("2"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            AppRoute::from_hash("#nowhere"),
            Err(RouteError::Unknown("nowhere".into()))
        );
        assert!(matches!(
            AppRoute::from_hash("#request"),
            Err(RouteError::MissingParam { param: "id", .. })
        ));
        assert!(matches!(
            AppRoute::from_hash("#workflow-edit?id=abc"),
            Err(RouteError::InvalidParam { param: "id", .. })
        ));
        assert!(matches!(
            AppRoute::from_hash("#master-data?entity=vendors"),
            Err(RouteError::InvalidParam { param: "entity", .. })
        ));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(AppRoute::resolve("#nowhere", "approvals"), AppRoute::Approvals);
        assert_eq!(
            AppRoute::resolve("#nowhere", "also-nowhere"),
            AppRoute::Requests { entity: None }
        );
        assert_eq!(AppRoute::resolve("", "approvals"), AppRoute::Requests { entity: None });
    }

    #[test]
    fn test_to_hash_is_parseable() {
        let routes = [
            AppRoute::RequestNew {
                entity: EntityKind::SpareParts,
                request_type: RequestType::Copy,
                source: Some("SP-30001".into()),
            },
            AppRoute::WorkflowEdit {
                id: None,
                country: "Indonesia".into(),
                entity: EntityKind::FinishedGoods,
            },
            AppRoute::RequestView {
                id: "REQ-CUST-0001".into(),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), Ok(route));
        }
    }
}
