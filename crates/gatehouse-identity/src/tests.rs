//! Unit tests for gatehouse-identity

use gatehouse_core::{
    CustomClaims, GatehouseError, Identity, ProviderKind, ProviderTokens,
};

use crate::decoder::IdentityDecoder;
use crate::settings::Settings;

// =============================================================================
// Decoder Dispatch Tests
// =============================================================================

#[cfg(test)]
mod decoder_tests {
    use super::*;

    #[test]
    fn test_decode_dispatches_to_configured_provider() {
        let decoder = IdentityDecoder::new(ProviderKind::GitHub);
        let identity = decoder.decode(br#"{"login": "octocat"}"#).unwrap();

        assert_eq!(identity.kind(), ProviderKind::GitHub);
        match identity {
            Identity::GitHub(github) => assert_eq!(github.login, "octocat"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_generic_provider_decodes_plain_user() {
        let decoder = IdentityDecoder::new(ProviderKind::Generic);
        let identity = decoder
            .decode(br#"{"username": "jdoe", "email": "jdoe@example.com"}"#)
            .unwrap();

        assert_eq!(identity.kind(), ProviderKind::Generic);
        assert_eq!(identity.user().username, "jdoe");
    }

    #[test]
    fn test_decode_normalized_resolves_username() {
        let decoder = IdentityDecoder::new(ProviderKind::Adfs);
        let identity = decoder
            .decode_normalized(br#"{"upn": "jdoe@corp.example.com"}"#)
            .unwrap();

        assert_eq!(identity.user().username, "jdoe@corp.example.com");
    }

    #[test]
    fn test_decode_normalized_surfaces_degenerate_username() {
        // A payload with no email still decodes; the empty username is the
        // caller's signal to reject the login.
        let decoder = IdentityDecoder::new(ProviderKind::Generic);
        let identity = decoder.decode_normalized(br#"{"name": "No Email"}"#).unwrap();

        assert!(identity.user().username.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let decoder = IdentityDecoder::new(ProviderKind::Google);
        let error = decoder.decode(b"not json").unwrap_err();

        match error {
            GatehouseError::DecodeError { provider, .. } => assert_eq!(provider, "google"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decoder_kind_follows_settings() {
        let settings = Settings {
            provider: ProviderKind::OpenStax,
            domains: vec![],
        };

        let decoder = IdentityDecoder::from_settings(&settings);
        assert_eq!(decoder.kind(), ProviderKind::OpenStax);
    }
}

// =============================================================================
// End-to-End Authentication Flow Tests
// =============================================================================

#[cfg(test)]
mod flow_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_payload_to_signed_claims_shape() {
        let decoder = IdentityDecoder::new(ProviderKind::Google);
        let identity = decoder
            .decode_normalized(
                br#"{
                    "sub": "110169484474386276334",
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "email_verified": true,
                    "hd": "example.com"
                }"#,
            )
            .unwrap();

        let tokens = ProviderTokens {
            access_token: "at-1".to_string(),
            id_token: "it-1".to_string(),
        };
        let claims = CustomClaims::assemble(&identity, Some(&tokens));

        assert_eq!(claims.get("username"), Some(&json!("jane@example.com")));
        assert_eq!(claims.get("email"), Some(&json!("jane@example.com")));
        assert_eq!(claims.get("hd"), Some(&json!("example.com")));
        assert_eq!(claims.get("accesstoken"), Some(&json!("at-1")));
    }

    #[test]
    fn test_openstax_payload_resolves_first_verified_contact() {
        let decoder = IdentityDecoder::new(ProviderKind::OpenStax);
        let identity = decoder
            .decode_normalized(
                br#"{
                    "id": "91",
                    "contact_infos": [
                        {"type": "EmailAddress", "value": "a@x.com", "is_verified": false},
                        {"type": "EmailAddress", "value": "b@x.com", "is_verified": true}
                    ]
                }"#,
            )
            .unwrap();

        assert_eq!(identity.user().email, "b@x.com");
        assert_eq!(identity.user().username, "b@x.com");
    }

    #[test]
    fn test_indieauth_payload_to_claims_without_tokens() {
        let decoder = IdentityDecoder::new(ProviderKind::IndieAuth);
        let identity = decoder
            .decode_normalized(br#"{"me": "https://jane.example.net/"}"#)
            .unwrap();

        let claims = CustomClaims::assemble(&identity, None);

        assert_eq!(claims.get("username"), Some(&json!("https://jane.example.net/")));
        assert!(claims.get("accesstoken").is_none());
        assert!(claims.get("idtoken").is_none());
    }

    #[test]
    fn test_decoding_twice_is_deterministic() {
        let raw = br#"{"login": "octocat", "email": "octocat@github.com"}"#;
        let decoder = IdentityDecoder::new(ProviderKind::GitHub);

        let first = decoder.decode_normalized(raw).unwrap();
        let second = decoder.decode_normalized(raw).unwrap();

        assert_eq!(first, second);
    }
}

// =============================================================================
// Settings Tests
// =============================================================================

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.provider, ProviderKind::Generic);
        assert!(settings.domains.is_empty());
    }

    #[test]
    fn test_provider_deserializes_from_lowercase_name() {
        let settings: Settings =
            serde_json::from_str(r#"{"provider": "github"}"#).unwrap();
        assert_eq!(settings.provider, ProviderKind::GitHub);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings.provider, ProviderKind::Generic);
        assert!(settings.domains.is_empty());
    }

    #[test]
    fn test_allows_domain_with_whitelist() {
        let settings = Settings {
            provider: ProviderKind::Generic,
            domains: vec!["s1.com".to_string()],
        };

        assert!(settings.allows_domain("s1.com"));
        assert!(!settings.allows_domain("s2.com"));
    }

    #[test]
    fn test_empty_whitelist_allows_every_domain() {
        let settings = Settings::default();
        assert!(settings.allows_domain("anything.example.com"));
    }
}
