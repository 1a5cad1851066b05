use thiserror::Error;

use crate::domain::ItemId;

/// Registration fields that must be non-blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Location,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Location => "location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required fields missing: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

impl ValidationError {
    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.missing.contains(&field)
    }

    /// Alert text for the registration form
    pub fn user_message(&self) -> String {
        match (self.is_missing(RequiredField::Name), self.is_missing(RequiredField::Location)) {
            (true, true) => "물품명과 위치는 필수 입력 사항입니다.".to_string(),
            (true, false) => "물품명은 필수 입력 사항입니다.".to_string(),
            _ => "위치는 필수 입력 사항입니다.".to_string(),
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields.iter().map(RequiredField::as_str).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
    #[error("no item ids left to assign")]
    IdSpaceExhausted,
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl CatalogError {
    /// Alert text for a failed registration
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Validation(err) => err.user_message(),
            CatalogError::IdSpaceExhausted => "더 이상 물품을 등록할 수 없습니다.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ValidationError { missing: vec![RequiredField::Name, RequiredField::Location] };
        assert_eq!(err.to_string(), "required fields missing: name, location");
        assert_eq!(err.user_message(), "물품명과 위치는 필수 입력 사항입니다.");
    }

    #[test]
    fn test_single_field_message() {
        let err = ValidationError { missing: vec![RequiredField::Location] };
        assert_eq!(err.user_message(), "위치는 필수 입력 사항입니다.");
        assert!(!err.is_missing(RequiredField::Name));
    }

    #[test]
    fn test_name_only_message() {
        let err = ValidationError { missing: vec![RequiredField::Name] };
        assert_eq!(err.user_message(), "물품명은 필수 입력 사항입니다.");
        assert!(!err.is_missing(RequiredField::Location));
    }

    #[test]
    fn test_catalog_error_message() {
        let err = CatalogError::from(ValidationError { missing: vec![RequiredField::Name] });
        assert_eq!(err.user_message(), "물품명은 필수 입력 사항입니다.");
        assert_eq!(CatalogError::IdSpaceExhausted.user_message(), "더 이상 물품을 등록할 수 없습니다.");
    }
}
