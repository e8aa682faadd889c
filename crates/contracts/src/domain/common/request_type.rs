use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    New,
    Copy,
    Edit,
}

impl RequestType {
    pub const ALL: [RequestType; 3] = [RequestType::New, RequestType::Copy, RequestType::Edit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Copy => "Copy",
            Self::Edit => "Edit",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Copy and Edit start from an existing master record
    pub fn needs_source(&self) -> bool {
        !matches!(self, Self::New)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
