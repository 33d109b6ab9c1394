//! Gatehouse Identity - provider payload decoding for the authentication
//! gateway
//!
//! The gateway's provider-auth layer hands this crate the raw JSON document
//! a provider returned for an authenticated user. Each provider module
//! decodes its own payload shape into the matching identity variant from
//! `gatehouse-core`; the [`IdentityDecoder`] dispatches on the configured
//! [`ProviderKind`] and wraps the result in the `Identity` sum type, ready
//! for normalization and claims assembly.

pub mod decoder;
pub mod providers;
pub mod settings;

#[cfg(test)]
mod tests;

pub use decoder::IdentityDecoder;
pub use settings::Settings;

// Re-export core identity types
pub use gatehouse_core::identity::*;
