//! 사용자 요청 DTO 모듈
//!
//! - [`register_user_request`] - 회원가입 요청 (`POST /users/`)
//! - [`login_request`] - 토큰 발급 요청 (`POST /authorizations/`)

pub mod register_user_request;
pub mod login_request;

pub use register_user_request::RegisterUserRequest;
pub use login_request::LoginRequest;
