//! IndieAuth payload decoding
//!
//! An IndieAuth authorization endpoint identifies the user by the URL they
//! authenticated as, returned in the `me` member.

use gatehouse_core::{IndieAuthUser, ProviderKind, Result};

use super::decode_payload;

pub fn decode_user(raw: &[u8]) -> Result<IndieAuthUser> {
    decode_payload(ProviderKind::IndieAuth, raw)
}
