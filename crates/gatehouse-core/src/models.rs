//! Tenancy models for the Gatehouse authentication gateway
//!
//! Teams bind member emails to the site domains they may reach. Records are
//! read-only snapshots inside this crate; creation, membership edits, and
//! deletion happen in the external store, which also enforces `id`
//! uniqueness.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Team has members and grants access to sites.
///
/// `members` and `sites` are carried as JSON arrays on the wire but treated
/// as sets: uniqueness by value, order irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: String,
    /// Member emails
    #[serde(default)]
    pub members: Vec<String>,
    /// Site domains this team grants access to
    #[serde(default)]
    pub sites: Vec<String>,
    #[serde(default, rename = "createdon")]
    pub created_on: i64,
    #[serde(default, rename = "lastupdate")]
    pub last_update: i64,
    /// Tenant-scoped identifier, unique within the external store
    #[serde(default)]
    pub id: i32,
}

impl Team {
    /// True iff `email` is one of this team's members.
    pub fn is_member(&self, email: &str) -> bool {
        self.members.iter().any(|m| m == email)
    }

    /// True iff this team grants access to `domain`.
    pub fn grants_site(&self, domain: &str) -> bool {
        self.sites.iter().any(|s| s == domain)
    }

    /// Stamp the snapshot ahead of a store write; `last_update` never moves
    /// backwards.
    pub fn touch(&mut self) {
        let now = Utc::now().timestamp();
        if self.created_on == 0 {
            self.created_on = now;
        }
        self.last_update = self.last_update.max(now);
    }
}

/// Site is the basic unit of access control, keyed by domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub domain: String,
    #[serde(default, rename = "createdon")]
    pub created_on: i64,
    #[serde(default, rename = "lastupdate")]
    pub last_update: i64,
    #[serde(default)]
    pub id: i32,
}

impl Site {
    pub fn touch(&mut self) {
        let now = Utc::now().timestamp();
        if self.created_on == 0 {
            self.created_on = now;
        }
        self.last_update = self.last_update.max(now);
    }
}

/// True iff some team has `email` as a member and lists `domain` among its
/// sites. Absence is a valid negative result, never an error.
pub fn can_access(teams: &[Team], email: &str, domain: &str) -> bool {
    teams
        .iter()
        .any(|t| t.is_member(email) && t.grants_site(domain))
}
