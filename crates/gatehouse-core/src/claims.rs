//! Claims assembly for session token signing
//!
//! The claim container is built fresh per authentication event from a
//! normalized identity plus the provider-issued tokens, then handed by
//! value to the external signer. Handoff transfers ownership; nothing can
//! mutate a container after it reaches the signer.

use crate::identity::Identity;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Opaque provider-issued credentials from the OAuth/OIDC exchange.
///
/// Held only for the lifetime of the in-flight authentication request and
/// never persisted past claims assembly.
#[derive(Clone, Default, PartialEq)]
pub struct ProviderTokens {
    pub access_token: String,
    pub id_token: String,
}

// Token material stays out of logs.
impl std::fmt::Debug for ProviderTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderTokens")
            .field("access_token", &"<redacted>")
            .field("id_token", &"<redacted>")
            .finish()
    }
}

/// Claim names for the provider token pass-through.
const CLAIM_ACCESS_TOKEN: &str = "accesstoken";
const CLAIM_ID_TOKEN: &str = "idtoken";

/// Temporary container holding custom claims until token creation.
///
/// String-keyed with unique keys (last write wins) and sum-typed values;
/// insertion order is irrelevant to the signer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomClaims {
    #[serde(flatten)]
    claims: HashMap<String, Value>,
}

impl CustomClaims {
    /// Build the claim map for a normalized identity.
    ///
    /// The identity's flattened serialization supplies at minimum
    /// `username`, `id`, `email`, `createdon`, and `lastupdate`, plus the
    /// provider-native fields. Provider tokens are passed through only when
    /// present; an unset pair emits no claim at all.
    pub fn assemble(identity: &Identity, tokens: Option<&ProviderTokens>) -> Self {
        let mut claims: HashMap<String, Value> =
            identity.to_claim_values().into_iter().collect();

        if let Some(tokens) = tokens {
            claims.insert(
                CLAIM_ACCESS_TOKEN.to_string(),
                Value::String(tokens.access_token.clone()),
            );
            claims.insert(
                CLAIM_ID_TOKEN.to_string(),
                Value::String(tokens.id_token.clone()),
            );
        }

        Self { claims }
    }

    /// Append one claim before handoff; an existing claim of the same name
    /// is replaced.
    pub fn with_claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.claims.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Consume the container for signing.
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.claims
    }
}
