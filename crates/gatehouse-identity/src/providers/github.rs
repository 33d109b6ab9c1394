//! GitHub user payload decoding
//!
//! GitHub's user API exposes the handle as `login` and the profile image as
//! `avatar_url`; the login is always the canonical username.

use gatehouse_core::{GitHubUser, ProviderKind, Result};

use super::decode_payload;

pub fn decode_user(raw: &[u8]) -> Result<GitHubUser> {
    decode_payload(ProviderKind::GitHub, raw)
}
