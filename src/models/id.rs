//! Opaque entity identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClientError, ClientResult};

/// Identifier returned by a backing service.
///
/// The services are independently owned and some return numeric ids while
/// others return strings; this client never interprets an id, it only echoes
/// it back into later requests in its original JSON form. The untagged
/// representation preserves that form across a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// Coerce the id to an integer.
    ///
    /// Invoice creation is the one endpoint that requires a numeric
    /// `appointmentId`; string ids are parsed, anything else is rejected.
    pub fn as_i64(&self) -> ClientResult<i64> {
        match self {
            EntityId::Int(n) => Ok(*n),
            EntityId::Str(s) => s.parse().map_err(|_| {
                ClientError::invalid_response("id", format!("not coercible to integer: {s:?}"))
            }),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{n}"),
            EntityId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Int(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Str(s.to_string())
    }
}
