//! Shared decoding helper for provider implementations

use gatehouse_core::{GatehouseError, ProviderKind, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Decode one provider-native JSON document.
///
/// A payload that does not match the provider's schema is an error here and
/// only here; the core assumes type-correct input.
pub(crate) fn decode_payload<T: DeserializeOwned>(
    provider: ProviderKind,
    raw: &[u8],
) -> Result<T> {
    serde_json::from_slice(raw).map_err(|e| {
        warn!(provider = %provider, error = %e, "failed to decode provider payload");
        GatehouseError::DecodeError {
            provider: provider.to_string(),
            message: e.to_string(),
        }
    })
}
