//! ADFS payload decoding
//!
//! The user principal name (`upn`) is authoritative and overwrites any
//! prior username at normalization time.

use gatehouse_core::{AdfsUser, ProviderKind, Result};

use super::decode_payload;

pub fn decode_user(raw: &[u8]) -> Result<AdfsUser> {
    decode_payload(ProviderKind::Adfs, raw)
}
