use serde::{Deserialize, Serialize};

/// Key-argument configuration for one paginated field.
///
/// `key_args` lists the argument names that distinguish one logical
/// connection from another. Pagination controls (`first`, `after`, `last`,
/// `before`) never qualify; listing one is rejected when the policy
/// registry is built.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldPolicyConfig {
    /// Field name as it appears in the query.
    pub field: String,

    /// Argument names that discriminate between connections.
    #[serde(default)]
    pub key_args: Vec<String>,
}
