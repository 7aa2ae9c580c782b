//! Per-field key-argument policies, validated before the cache goes live.

use super::args::*;
use super::key_args::*;
use super::self_prelude::*;
use mpdx_cache_lib::config::FieldPolicyConfig;
use thiserror::Error;

pub type PolicyResult<T> = Result<T, PolicyError>;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Field defined more than once: {0:?}")]
    DuplicateField(String),
    #[error("Pagination argument {0:?} cannot discriminate connections on field {1:?}")]
    PaginationKeyArg(String, String),
}

/// Key-argument rule for one field.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldPolicy {
    pub rule: KeyArgsRule,
}

/// Registry of per-field policies. Misconfigured key arguments surface here,
/// at startup, rather than as silently wrong merges later.
#[derive(Clone, Debug, Default)]
pub struct FieldPolicies {
    fields: IndexMap<String, FieldPolicy>,
    default: FieldPolicy,
}

impl FieldPolicies {
    pub fn builder() -> FieldPoliciesBuilder {
        FieldPoliciesBuilder::default()
    }

    /// Key-argument rule for a field. Unregistered fields fall back to the
    /// default rule.
    pub fn rule(&self, field: &str) -> &KeyArgsRule {
        self.fields
            .get(field)
            .map(|policy| &policy.rule)
            .unwrap_or(&self.default.rule)
    }

    /// Build a registry from configuration entries.
    pub fn from_config(entries: &[FieldPolicyConfig]) -> PolicyResult<Self> {
        let mut builder = Self::builder();
        for entry in entries {
            builder.define_field(
                &entry.field,
                KeyArgsRule::Explicit(entry.key_args.clone()),
            );
        }
        builder.finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FieldPoliciesBuilder {
    fields: Vec<(String, FieldPolicy)>,
}

impl FieldPoliciesBuilder {
    pub fn define_field(
        &mut self,
        name: impl Into<String>,
        rule: KeyArgsRule,
    ) -> &mut Self {
        self.fields.push((name.into(), FieldPolicy { rule }));
        self
    }

    pub fn finish(self) -> PolicyResult<FieldPolicies> {
        let mut fields: IndexMap<String, FieldPolicy> = IndexMap::new();

        for (name, policy) in self.fields {
            if let KeyArgsRule::Explicit(names) = &policy.rule {
                if let Some(arg) = names.iter().find(|n| FieldArgs::is_pagination_arg(n)) {
                    return Err(PolicyError::PaginationKeyArg(arg.clone(), name));
                }
            }
            if fields.insert(name.clone(), policy).is_some() {
                return Err(PolicyError::DuplicateField(name));
            }
        }

        Ok(FieldPolicies {
            fields,
            default: FieldPolicy::default(),
        })
    }
}
