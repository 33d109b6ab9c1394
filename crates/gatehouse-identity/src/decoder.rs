//! Identity decoder - dispatches raw payloads to the configured provider
//!
//! One gateway instance authenticates against a single provider; the
//! decoder is constructed once from settings and shared freely, since it
//! carries no mutable state. Each authentication request owns its decoded
//! `Identity` exclusively.

use gatehouse_core::{Identity, PrepareIdentity, ProviderKind, Result, User};
use tracing::{debug, instrument};

use crate::providers;
use crate::settings::Settings;

/// Decodes provider payloads into the [`Identity`] sum type.
#[derive(Debug, Clone, Copy)]
pub struct IdentityDecoder {
    kind: ProviderKind,
}

impl IdentityDecoder {
    pub fn new(kind: ProviderKind) -> Self {
        Self { kind }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.provider)
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Decode one raw provider response into the matching variant.
    #[instrument(skip(self, raw), fields(provider = %self.kind))]
    pub fn decode(&self, raw: &[u8]) -> Result<Identity> {
        debug!(bytes = raw.len(), "decoding provider payload");

        match self.kind {
            ProviderKind::Google => {
                providers::google::decode_user(raw).map(Identity::Google)
            }
            ProviderKind::Adfs => providers::adfs::decode_user(raw).map(Identity::Adfs),
            ProviderKind::GitHub => {
                providers::github::decode_user(raw).map(Identity::GitHub)
            }
            ProviderKind::IndieAuth => {
                providers::indieauth::decode_user(raw).map(Identity::IndieAuth)
            }
            ProviderKind::OpenStax => {
                providers::openstax::decode_user(raw).map(Identity::OpenStax)
            }
            ProviderKind::Generic => {
                providers::decode_payload::<User>(ProviderKind::Generic, raw)
                    .map(Identity::Plain)
            }
        }
    }

    /// Decode and resolve the canonical username in one step.
    ///
    /// The result may still carry an empty username for a degenerate
    /// payload; callers reject those as failed authentications.
    pub fn decode_normalized(&self, raw: &[u8]) -> Result<Identity> {
        let mut identity = self.decode(raw)?;
        identity.prepare_identity();
        Ok(identity)
    }
}
