//! Collaborator seams for the Gatehouse core
//!
//! Persistence and token signing live outside this crate; these traits are
//! the surfaces the core consumes and produces. Implementations own their
//! concurrency discipline; the core only reads snapshots through them.

use crate::{claims::CustomClaims, error::Result, identity::User, models::*};
use async_trait::async_trait;

// =============================================================================
// Store Seams
// =============================================================================

/// Canonical user records keyed by their opaque `id`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn put_user(&self, user: &User) -> Result<()>;
}

/// Team snapshots for membership and access decisions.
#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn get_team(&self, id: i32) -> Result<Option<Team>>;

    /// All teams that list `email` as a member.
    async fn teams_for_member(&self, email: &str) -> Result<Vec<Team>>;
}

/// Site snapshots keyed by domain.
#[async_trait]
pub trait SiteStore: Send + Sync {
    async fn get_site(&self, domain: &str) -> Result<Option<Site>>;
    async fn list_sites(&self) -> Result<Vec<Site>>;
}

// =============================================================================
// Signer Seam
// =============================================================================

/// The session-token signer consuming assembled claims.
///
/// Takes the container by value: handoff is a transfer of ownership, and a
/// signed container cannot be mutated afterwards.
#[async_trait]
pub trait TokenSigner: Send + Sync {
    async fn sign(&self, claims: CustomClaims) -> Result<String>;
}
