use std::fmt;
use thiserror::Error;

/// Machine-readable reason attached to a rejected write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKey {
    IdExists,
    IdNull,
    IdInvalid,
    IdNotFound,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::IdExists => "idexists",
            ErrorKey::IdNull => "idnull",
            ErrorKey::IdInvalid => "idinvalid",
            ErrorKey::IdNotFound => "idnotfound",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors for app logic (request validation).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        entity_name: &'static str,
        error_key: ErrorKey,
    },
}

impl AppError {
    pub fn id_exists(entity_name: &'static str) -> Self {
        AppError::Validation {
            message: format!("A new {entity_name} cannot already have an ID"),
            entity_name,
            error_key: ErrorKey::IdExists,
        }
    }

    pub fn id_null(entity_name: &'static str) -> Self {
        AppError::Validation {
            message: "Invalid id".to_string(),
            entity_name,
            error_key: ErrorKey::IdNull,
        }
    }

    pub fn id_invalid(entity_name: &'static str) -> Self {
        AppError::Validation {
            message: "Invalid ID".to_string(),
            entity_name,
            error_key: ErrorKey::IdInvalid,
        }
    }

    pub fn id_not_found(entity_name: &'static str) -> Self {
        AppError::Validation {
            message: "Entity not found".to_string(),
            entity_name,
            error_key: ErrorKey::IdNotFound,
        }
    }

    pub fn error_key(&self) -> ErrorKey {
        match self {
            AppError::Validation { error_key, .. } => *error_key,
        }
    }

    pub fn entity_name(&self) -> &'static str {
        match self {
            AppError::Validation { entity_name, .. } => entity_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_exists_message_names_entity() {
        let err = AppError::id_exists("heroDetails");
        assert_eq!(err.to_string(), "A new heroDetails cannot already have an ID");
        assert_eq!(err.error_key(), ErrorKey::IdExists);
        assert_eq!(err.entity_name(), "heroDetails");
    }

    #[test]
    fn test_error_keys() {
        assert_eq!(AppError::id_null("heroKeys").error_key().as_str(), "idnull");
        assert_eq!(AppError::id_invalid("heroKeys").error_key().as_str(), "idinvalid");
        assert_eq!(AppError::id_not_found("heroKeys").error_key().to_string(), "idnotfound");
    }
}
