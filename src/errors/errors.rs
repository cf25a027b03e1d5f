//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원가입 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 응답 형식
//!
//! 필드 검증 실패는 필드 이름을 키로 하는 맵으로 응답합니다.
//!
//! ```json
//! {
//!   "mobile": ["mobile number format is invalid"],
//!   "sms_code": ["verification code incorrect"]
//! }
//! ```
//!
//! 그 외의 에러는 `{ "error": "..." }` 형태입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, FieldErrors};
//!
//! async fn check(mobile: &str) -> Result<(), AppError> {
//!     if mobile.is_empty() {
//!         return Err(FieldErrors::single("mobile", "this field is required").into());
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// 필드 이름 → 에러 메시지 목록
///
/// 직렬화 시 필드 순서가 항상 같도록 `BTreeMap`을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 하나의 필드에 하나의 메시지만 담긴 에러 맵을 생성합니다.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// 필드에 메시지를 추가합니다. 같은 필드의 메시지는 순서대로 누적됩니다.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    /// `validator`의 필드 에러를 메시지 맵으로 옮깁니다.
    /// 메시지가 지정되지 않은 규칙은 에러 코드를 메시지로 사용합니다.
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut field_errors = Self::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                field_errors.add(field.to_string(), message);
            }
        }
        field_errors
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드 단위 검증 에러 (400 Bad Request, 필드 맵 응답)
    #[error("Invalid input: {0}")]
    Invalid(FieldErrors),

    /// 요청 본문 자체를 해석할 수 없는 경우 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Invalid(errors)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::Invalid(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 필드 검증 에러는 필드 맵 그대로, 나머지는 `error` 키 하나로 응답합니다.
    /// 서버 에러의 상세 내용은 로그에만 남기고 응답에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let mut builder = actix_web::HttpResponse::build(status);

        match self {
            AppError::Invalid(errors) => builder.json(errors),
            _ if status.is_server_error() => {
                log::error!("요청 처리 실패: {}", self);
                builder.json(serde_json::json!({
                    "error": "internal server error"
                }))
            }
            _ => builder.json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
