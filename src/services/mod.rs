//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받으며, 애플리케이션 시작 시
//! 한 번 구성되어 `web::Data`로 핸들러와 공유됩니다.
//!
//! # Features
//!
//! - 회원가입 검증 파이프라인 및 사용자 생성
//! - 사용자명/휴대폰 번호 중복 확인
//! - JWT 세션 토큰 발급 및 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let tokens = Arc::new(TokenService::from_env());
//! let user_service = UserService::new(user_store, code_store, tokens, PasswordConfig::bcrypt_cost());
//! ```

pub mod users;
pub mod auth;
