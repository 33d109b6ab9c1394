//! Identity records for multi-provider authentication
//!
//! Every supported provider yields its own payload shape; each shape embeds
//! the canonical [`User`] and adds provider-native fields. Before an
//! identity may be placed into a session token it passes through the
//! [`PrepareIdentity`] contract, which resolves the canonical username from
//! the provider-designated source field.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// =============================================================================
// Provider Kinds
// =============================================================================

/// Supported identity provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google OpenID Connect
    Google,
    /// Active Directory Federation Services
    Adfs,
    /// GitHub OAuth
    GitHub,
    /// IndieAuth (indieauth.net)
    IndieAuth,
    /// OpenStax Accounts
    OpenStax,
    /// Generic provider carrying no extra fields beyond the canonical record
    Generic,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::Adfs => write!(f, "adfs"),
            Self::GitHub => write!(f, "github"),
            Self::IndieAuth => write!(f, "indieauth"),
            Self::OpenStax => write!(f, "openstax"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

// =============================================================================
// Canonical User
// =============================================================================

/// The canonical identity record placed into session tokens.
///
/// Field names in JSON form are the wire/storage contract shared with the
/// external store and the token signer. Provider payloads rarely carry the
/// canonical fields, so every field defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Resolved canonical username; non-empty after normalization unless the
    /// source payload itself was degenerate
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Unix-epoch seconds, assigned by the external store
    #[serde(default, rename = "createdon")]
    pub created_on: i64,
    /// Unix-epoch seconds, monotonic non-decreasing per record
    #[serde(default, rename = "lastupdate")]
    pub last_update: i64,
    /// Opaque stable identifier, externally assigned
    #[serde(default)]
    pub id: String,
}

impl User {
    /// Stamp the record with the current time ahead of a store write.
    ///
    /// `last_update` never moves backwards; `created_on` is filled only on
    /// the first touch of a fresh record.
    pub fn touch(&mut self) {
        let now = Utc::now().timestamp();
        if self.created_on == 0 {
            self.created_on = now;
        }
        self.last_update = self.last_update.max(now);
    }
}

// =============================================================================
// Provider Variants
// =============================================================================

/// A retrieved and authenticated user from Google.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub gender: String,
    #[serde(default, rename = "hd")]
    pub host_domain: String,
}

/// An Active Directory Federation Services user record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfsUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub upn: String,
}

/// A retrieved and authenticated user from GitHub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub login: String,
    #[serde(default, rename = "avatar_url")]
    pub picture: String,
}

/// An IndieAuth identity; see indieauth.net.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndieAuthUser {
    #[serde(flatten)]
    pub user: User,
    /// The URL the user authenticated as
    #[serde(default, rename = "me")]
    pub url: String,
}

/// One contact entry of an OpenStax Accounts profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "is_verified")]
    pub verified: bool,
}

/// A retrieved and authenticated user from OpenStax Accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenStaxUser {
    #[serde(flatten)]
    pub user: User,
    /// Contacts in profile order; the first verified email wins
    #[serde(default, rename = "contact_infos")]
    pub contacts: Vec<Contact>,
}

// =============================================================================
// Normalization Contract
// =============================================================================

/// Resolves the canonical username of an identity in place.
///
/// Implemented by every variant and by the base [`User`]. The operation
/// never fails and is idempotent; a resulting empty username is a valid
/// degenerate outcome that downstream consumers must treat as an
/// authentication failure.
pub trait PrepareIdentity {
    fn prepare_identity(&mut self);
}

impl PrepareIdentity for User {
    fn prepare_identity(&mut self) {
        if self.username.is_empty() {
            self.username = self.email.clone();
        }
    }
}

impl PrepareIdentity for GoogleUser {
    fn prepare_identity(&mut self) {
        self.user.username = self.user.email.clone();
    }
}

impl PrepareIdentity for AdfsUser {
    fn prepare_identity(&mut self) {
        self.user.username = self.upn.clone();
    }
}

impl PrepareIdentity for GitHubUser {
    // always use the login as the username
    fn prepare_identity(&mut self) {
        self.user.username = self.login.clone();
    }
}

impl PrepareIdentity for IndieAuthUser {
    fn prepare_identity(&mut self) {
        self.user.username = self.url.clone();
    }
}

impl PrepareIdentity for OpenStaxUser {
    fn prepare_identity(&mut self) {
        if self.user.email.is_empty() {
            if let Some(contact) = self
                .contacts
                .iter()
                .find(|c| c.kind == "EmailAddress" && c.verified)
            {
                self.user.email = contact.value.clone();
            }
        }
        self.user.prepare_identity();
    }
}

// =============================================================================
// Identity Sum Type
// =============================================================================

/// One decoded provider payload, tagged by provider kind.
///
/// Serializes untagged: the embedded canonical fields and the
/// provider-native extras flatten into a single JSON object, which is the
/// shape the claims assembly consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Identity {
    Google(GoogleUser),
    Adfs(AdfsUser),
    GitHub(GitHubUser),
    IndieAuth(IndieAuthUser),
    OpenStax(OpenStaxUser),
    Plain(User),
}

impl Identity {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Google(_) => ProviderKind::Google,
            Self::Adfs(_) => ProviderKind::Adfs,
            Self::GitHub(_) => ProviderKind::GitHub,
            Self::IndieAuth(_) => ProviderKind::IndieAuth,
            Self::OpenStax(_) => ProviderKind::OpenStax,
            Self::Plain(_) => ProviderKind::Generic,
        }
    }

    /// The embedded canonical record.
    pub fn user(&self) -> &User {
        match self {
            Self::Google(u) => &u.user,
            Self::Adfs(u) => &u.user,
            Self::GitHub(u) => &u.user,
            Self::IndieAuth(u) => &u.user,
            Self::OpenStax(u) => &u.user,
            Self::Plain(u) => u,
        }
    }

    pub fn user_mut(&mut self) -> &mut User {
        match self {
            Self::Google(u) => &mut u.user,
            Self::Adfs(u) => &mut u.user,
            Self::GitHub(u) => &mut u.user,
            Self::IndieAuth(u) => &mut u.user,
            Self::OpenStax(u) => &mut u.user,
            Self::Plain(u) => u,
        }
    }

    /// Normalize and hand the identity back, for call sites that thread
    /// a freshly decoded value straight into claims assembly.
    pub fn into_prepared(mut self) -> Self {
        self.prepare_identity();
        self
    }

    /// Serialize to the flattened claim object form.
    ///
    /// Total by construction: every variant serializes to a JSON object.
    pub fn to_claim_values(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::to_value(self)
            .map(|v| v.as_object().cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl PrepareIdentity for Identity {
    fn prepare_identity(&mut self) {
        match self {
            Self::Google(u) => u.prepare_identity(),
            Self::Adfs(u) => u.prepare_identity(),
            Self::GitHub(u) => u.prepare_identity(),
            Self::IndieAuth(u) => u.prepare_identity(),
            Self::OpenStax(u) => u.prepare_identity(),
            Self::Plain(u) => u.prepare_identity(),
        }
    }
}
