//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 `AppError`와 필드 에러 맵
//! - [`registration_error`] - 회원가입 검증 실패 분류

pub mod errors;
pub mod registration_error;

pub use errors::{AppError, AppResult, ErrorContext, FieldErrors};
pub use registration_error::{RegistrationError, UniqueField};
