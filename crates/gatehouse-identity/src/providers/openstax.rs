//! OpenStax Accounts payload decoding
//!
//! An OpenStax profile lists addresses under `contact_infos`; only a
//! verified entry of type `EmailAddress` may fill an empty canonical email.

use gatehouse_core::{OpenStaxUser, ProviderKind, Result};

use super::decode_payload;

pub fn decode_user(raw: &[u8]) -> Result<OpenStaxUser> {
    decode_payload(ProviderKind::OpenStax, raw)
}
