//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, User};
//!
//! let user = User::new(NewUser {
//!     username: "alice1".to_string(),
//!     mobile: "13900001111".to_string(),
//!     password_hash,
//! });
//! ```

pub mod user;

pub use user::{NewUser, User};
