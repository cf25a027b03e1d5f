//! # Domain Module
//!
//! 회원가입 서비스의 도메인 계층입니다.
//!
//! - [`entities`] - 저장되는 사용자 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//! - [`models`] - 토큰 클레임 등 값 객체

pub mod entities;
pub mod dto;
pub mod models;
