//! 인증 서비스 모듈
//!
//! 회원가입/로그인 직후 응답에 포함되는 JWT 세션 토큰을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리 (`JWT_EXPIRATION_HOURS`)

pub mod token_service;

pub use token_service::TokenService;
