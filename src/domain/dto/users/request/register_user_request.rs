//! # 회원가입 요청 DTO
//!
//! `POST /users/` 본문을 표현합니다. `validator`로 필드 단위 형식 규칙(스키마 단계)을
//! 검사하고, 통과하면 검증 파이프라인이 사용하는 [`RegistrationForm`]으로 변환됩니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `username` | 5-20자, 단어 문자와 `.@+-`만 허용 |
//! | `mobile` | `^1[3-9]\d{9}$` |
//! | `password` | 8-20자 |
//! | `password2`, `sms_code`, `allow` | 필수 |
//!
//! 동의 여부, 비밀번호 일치, 인증번호 비교는 스키마 단계 이후
//! 서비스 계층의 순차 검사에서 처리합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "alice1",
//!   "mobile": "13900001111",
//!   "password": "password1",
//!   "password2": "password1",
//!   "sms_code": "123456",
//!   "allow": "true"
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::errors::{FieldErrors, RegistrationError};
use crate::services::users::registration::RegistrationForm;
use crate::utils::patterns::{has_valid_username_chars, is_valid_mobile};

const REQUIRED: &str = "this field is required";
const NOT_NULL: &str = "this field may not be null";
const NOT_A_STRING: &str = "not a valid string";

/// 회원가입 요청
///
/// 누락된 필드는 빈 문자열로 채워진 뒤 필수 규칙에서 걸러집니다.
/// 숫자로 전송된 값은 문자열로 받아들이고, `null`이나 불리언/배열/객체는
/// 본문 파싱을 실패시키지 않고 해당 필드의 형식 에러로 기록합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(from = "RegisterUserPayload")]
pub struct RegisterUserRequest {
    #[validate(length(min = 5, max = 20, message = "username must be 5-20 characters"))]
    #[validate(custom(function = "validate_username_chars"))]
    pub username: String,

    #[validate(custom(function = "validate_mobile"))]
    pub mobile: String,

    #[validate(length(min = 8, max = 20, message = "password must be 8-20 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "this field is required"))]
    pub password2: String,

    #[validate(length(min = 1, message = "this field is required"))]
    pub sms_code: String,

    #[validate(length(min = 1, message = "this field is required"))]
    pub allow: String,

    /// 본문 파싱 단계에서 발견된 타입 에러
    #[serde(skip)]
    pub(crate) type_errors: FieldErrors,
}

/// JSON 본문 그대로의 회원가입 요청
///
/// 필드가 없으면 `None`, `null`이면 `Some(Value::Null)`입니다.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RegisterUserPayload {
    #[serde(deserialize_with = "present")]
    username: Option<Value>,
    #[serde(deserialize_with = "present")]
    mobile: Option<Value>,
    #[serde(deserialize_with = "present")]
    password: Option<Value>,
    #[serde(deserialize_with = "present")]
    password2: Option<Value>,
    #[serde(deserialize_with = "present")]
    sms_code: Option<Value>,
    #[serde(deserialize_with = "present")]
    allow: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 문자열과 숫자는 텍스트로, 그 외 타입은 필드 에러로 변환합니다.
fn text_field(field: &str, value: Option<Value>, errors: &mut FieldErrors) -> String {
    match value {
        None => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Null) => {
            errors.add(field, NOT_NULL);
            String::new()
        }
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            String::new()
        }
    }
}

impl From<RegisterUserPayload> for RegisterUserRequest {
    fn from(payload: RegisterUserPayload) -> Self {
        let mut type_errors = FieldErrors::new();

        Self {
            username: text_field("username", payload.username, &mut type_errors),
            mobile: text_field("mobile", payload.mobile, &mut type_errors),
            password: text_field("password", payload.password, &mut type_errors),
            password2: text_field("password2", payload.password2, &mut type_errors),
            sms_code: text_field("sms_code", payload.sms_code, &mut type_errors),
            allow: text_field("allow", payload.allow, &mut type_errors),
            type_errors,
        }
    }
}

impl RegisterUserRequest {
    /// 스키마 단계 검증을 수행하고 검증 파이프라인용 폼으로 변환합니다.
    ///
    /// 모든 필드의 앞뒤 공백을 제거한 뒤 검사합니다.
    /// 형식 오류가 있는 모든 필드를 한 번에 모아 `RegistrationError::FieldFormat`으로 반환하며,
    /// 타입 에러가 난 필드에는 길이/필수 규칙 메시지를 덧붙이지 않습니다.
    pub fn into_form(self) -> Result<RegistrationForm, RegistrationError> {
        let request = self.trimmed();
        let mut errors = request.type_errors.clone();

        if let Err(validation) = request.validate() {
            let schema_errors = FieldErrors::from(&validation);
            for field in schema_errors.fields() {
                if errors.contains(field) {
                    continue;
                }
                for message in schema_errors.messages(field) {
                    errors.add(field, message.clone());
                }
            }
        }

        if !errors.is_empty() {
            return Err(RegistrationError::FieldFormat(errors));
        }

        Ok(RegistrationForm {
            username: request.username,
            mobile: request.mobile,
            password: request.password,
            password2: request.password2,
            sms_code: request.sms_code,
            allow: request.allow,
        })
    }

    fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            password: self.password.trim().to_string(),
            password2: self.password2.trim().to_string(),
            sms_code: self.sms_code.trim().to_string(),
            allow: self.allow.trim().to_string(),
            type_errors: self.type_errors,
        }
    }
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if !has_valid_username_chars(username) {
        return Err(ValidationError::new("invalid_username")
            .with_message("username may contain only letters, digits and . @ + - _".into()));
    }
    Ok(())
}

fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.is_empty() {
        return Err(ValidationError::new("required").with_message(REQUIRED.into()));
    }
    if !is_valid_mobile(mobile) {
        return Err(ValidationError::new("invalid_mobile")
            .with_message("mobile number format is invalid".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "alice1".to_string(),
            mobile: "13900001111".to_string(),
            password: "password1".to_string(),
            password2: "password1".to_string(),
            sms_code: "123456".to_string(),
            allow: "true".to_string(),
            ..Default::default()
        }
    }

    fn format_errors(request: RegisterUserRequest) -> FieldErrors {
        match request.into_form() {
            Err(RegistrationError::FieldFormat(errors)) => errors,
            other => panic!("expected field format error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_becomes_form() {
        let form = valid_request().into_form().unwrap();

        assert_eq!(form.username, "alice1");
        assert_eq!(form.mobile, "13900001111");
        assert_eq!(form.allow, "true");
    }

    #[rstest]
    #[case("abcd")]
    #[case("abcdefghijklmnopqrstu")]
    #[case("")]
    fn test_username_length_bounds(#[case] username: &str) {
        let request = RegisterUserRequest {
            username: username.to_string(),
            ..valid_request()
        };

        let errors = format_errors(request);
        assert_eq!(errors.messages("username"), ["username must be 5-20 characters"]);
    }

    #[test]
    fn test_username_length_counts_characters() {
        let request = RegisterUserRequest {
            username: "사용자이름".to_string(),
            ..valid_request()
        };

        assert!(request.into_form().is_ok());
    }

    #[test]
    fn test_username_rejects_spaces() {
        let request = RegisterUserRequest {
            username: "alice bob".to_string(),
            ..valid_request()
        };

        assert!(format_errors(request).contains("username"));
    }

    #[rstest]
    #[case("1390000111", "mobile number format is invalid")]
    #[case("12900001111", "mobile number format is invalid")]
    #[case("", "this field is required")]
    fn test_mobile_pattern(#[case] mobile: &str, #[case] message: &str) {
        let request = RegisterUserRequest {
            mobile: mobile.to_string(),
            ..valid_request()
        };

        assert_eq!(format_errors(request).messages("mobile"), [message]);
    }

    #[rstest]
    #[case("short1")]
    #[case("password_longer_than_20")]
    fn test_password_length_bounds(#[case] password: &str) {
        let request = RegisterUserRequest {
            password: password.to_string(),
            password2: password.to_string(),
            ..valid_request()
        };

        assert!(format_errors(request).contains("password"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let request: RegisterUserRequest =
            serde_json::from_str(r#"{"username": "alice1"}"#).unwrap();

        let errors = format_errors(request);
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(
            fields,
            vec!["allow", "mobile", "password", "password2", "sms_code"]
        );
        assert_eq!(errors.messages("sms_code"), [REQUIRED]);
    }

    #[test]
    fn test_numbers_are_accepted_as_text() {
        let request: RegisterUserRequest = serde_json::from_value(serde_json::json!({
            "username": "alice1",
            "mobile": 13900001111u64,
            "password": "password1",
            "password2": "password1",
            "sms_code": 123456,
            "allow": "true"
        }))
        .unwrap();

        let form = request.into_form().unwrap();
        assert_eq!(form.mobile, "13900001111");
        assert_eq!(form.sms_code, "123456");
    }

    #[test]
    fn test_wrong_types_are_keyed_by_field() {
        let request: RegisterUserRequest = serde_json::from_value(serde_json::json!({
            "username": "alice1",
            "mobile": "13900001111",
            "password": "password1",
            "password2": null,
            "sms_code": "123456",
            "allow": true
        }))
        .unwrap();

        let errors = format_errors(request);
        assert_eq!(errors.messages("password2"), [NOT_NULL]);
        assert_eq!(errors.messages("allow"), [NOT_A_STRING]);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["allow", "password2"]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let request = RegisterUserRequest {
            username: "  alice1 ".to_string(),
            mobile: " 13900001111".to_string(),
            sms_code: " 123456 ".to_string(),
            ..valid_request()
        };

        let form = request.into_form().unwrap();
        assert_eq!(form.username, "alice1");
        assert_eq!(form.mobile, "13900001111");
        assert_eq!(form.sms_code, "123456");
    }

    #[test]
    fn test_blank_field_is_required_after_trim() {
        let request = RegisterUserRequest {
            sms_code: "   ".to_string(),
            ..valid_request()
        };

        assert_eq!(format_errors(request).messages("sms_code"), [REQUIRED]);
    }
}
