//! Cache keys for entities and their paginated list fields.

use super::self_prelude::*;
use crate::policy::KeyArgsSignature;

/// Cache identity of an entity, rendered as `Typename:id`.
#[derive(Clone, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct EntityKey {
    pub typename: String,
    pub id: String,
}

impl EntityKey {
    pub fn new(typename: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            typename: typename.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.typename, self.id)
    }
}

impl FromStr for EntityKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((typename, id)) if !typename.is_empty() && !id.is_empty() => {
                Ok(Self::new(typename, id))
            }
            _ => Err(format!("Invalid entity key {s:?}")),
        }
    }
}

/// Cache key of one paginated list field for one key-argument signature.
#[derive(Clone, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct ConnectionKey {
    pub entity: EntityKey,
    pub field: String,
    pub signature: KeyArgsSignature,
}

impl ConnectionKey {
    pub fn new(entity: EntityKey, field: impl Into<String>, signature: KeyArgsSignature) -> Self {
        Self {
            entity,
            field: field.into(),
            signature,
        }
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.entity, self.field, self.signature)
    }
}
