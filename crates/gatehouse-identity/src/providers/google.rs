//! Google userinfo payload decoding
//!
//! Google's OpenID Connect userinfo document carries `email`,
//! `given_name`/`family_name`, and the hosted-domain hint `hd`. The email
//! becomes the canonical username at normalization time.

use gatehouse_core::{GoogleUser, ProviderKind, Result};

use super::decode_payload;

pub fn decode_user(raw: &[u8]) -> Result<GoogleUser> {
    decode_payload(ProviderKind::Google, raw)
}
