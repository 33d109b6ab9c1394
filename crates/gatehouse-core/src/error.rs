//! Error types for the Gatehouse platform

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatehouseError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Failed to decode {provider} payload: {message}")]
    DecodeError { provider: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GatehouseError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
        }
    }

    pub fn decode_error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DecodeError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn store_error(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatehouseError>;
