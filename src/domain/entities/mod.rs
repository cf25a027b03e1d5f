//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 엔티티)
//! ├── models/       ← 토큰 클레임 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod users;

pub use users::*;
