//! # Domain Models Module
//!
//! 저장되지 않는 값 객체들을 정의합니다.
//!
//! - [`token`] - 세션 토큰 클레임

pub mod token;

pub use token::*;
