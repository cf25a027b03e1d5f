//! 회원가입 검증 실패 분류
//!
//! 회원가입 요청이 거부되는 모든 사유를 태그된 열거형으로 표현합니다.
//! 각 사유는 응답 맵에서 어느 필드 아래에 보고될지 알고 있으며,
//! `AppError::Invalid`로 변환되어 400 응답이 됩니다.

use thiserror::Error;

use crate::errors::errors::{AppError, FieldErrors};

/// 유니크 제약이 걸린 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Mobile,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Username => "username",
            UniqueField::Mobile => "mobile",
        }
    }
}

/// 회원가입 검증 에러
///
/// 검증 순서상 처음 실패한 규칙 하나만 담깁니다.
/// 단, 스키마 단계(`FieldFormat`)는 형식 오류가 있는 모든 필드를 한 번에 담습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// 길이/패턴 위반 (스키마 단계)
    #[error("invalid field format: {0}")]
    FieldFormat(FieldErrors),

    #[error("agreement not accepted")]
    AgreementNotAccepted,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("verification code missing or expired")]
    VerificationCodeMissing,

    #[error("verification code incorrect")]
    VerificationCodeIncorrect,

    /// 저장소의 유니크 인덱스가 쓰기를 거부한 경우
    #[error("{} already exists", .0.as_str())]
    UniquenessConflict(UniqueField),
}

impl RegistrationError {
    /// 응답 맵에서 이 에러가 보고되는 필드 이름
    ///
    /// `FieldFormat`은 여러 필드를 가질 수 있으므로 `None`을 반환합니다.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RegistrationError::FieldFormat(_) => None,
            RegistrationError::AgreementNotAccepted => Some("allow"),
            RegistrationError::PasswordMismatch => Some("password2"),
            RegistrationError::VerificationCodeMissing
            | RegistrationError::VerificationCodeIncorrect => Some("sms_code"),
            RegistrationError::UniquenessConflict(field) => Some(field.as_str()),
        }
    }

    /// 필드 맵 형태로 변환합니다.
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            RegistrationError::FieldFormat(errors) => errors,
            other => {
                let field = other.field().unwrap_or("non_field_errors");
                FieldErrors::single(field, other.to_string())
            }
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(error: RegistrationError) -> Self {
        AppError::Invalid(error.into_field_errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_is_keyed_by_offending_field() {
        let cases = [
            (RegistrationError::AgreementNotAccepted, "allow", "agreement not accepted"),
            (RegistrationError::PasswordMismatch, "password2", "passwords do not match"),
            (
                RegistrationError::VerificationCodeMissing,
                "sms_code",
                "verification code missing or expired",
            ),
            (
                RegistrationError::VerificationCodeIncorrect,
                "sms_code",
                "verification code incorrect",
            ),
            (
                RegistrationError::UniquenessConflict(UniqueField::Mobile),
                "mobile",
                "mobile already exists",
            ),
        ];

        for (error, field, message) in cases {
            let errors = error.into_field_errors();
            assert_eq!(errors.messages(field), [message]);
        }
    }

    #[test]
    fn test_field_format_keeps_all_fields() {
        let mut format_errors = FieldErrors::new();
        format_errors.add("username", "too short");
        format_errors.add("password", "too short");

        let errors = RegistrationError::FieldFormat(format_errors.clone()).into_field_errors();
        assert_eq!(errors, format_errors);
    }

    #[test]
    fn test_converts_into_bad_request() {
        let app_error = AppError::from(RegistrationError::PasswordMismatch);
        assert!(matches!(app_error, AppError::Invalid(ref e) if e.contains("password2")));
    }
}
