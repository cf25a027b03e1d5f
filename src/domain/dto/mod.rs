//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 역할 | 사용 도구 |
//! |------|-----------|
//! | HTTP 요청 본문 매핑 | `serde` + `request` 모듈 |
//! | HTTP 응답 본문 매핑 | `serde` + `response` 모듈 |
//! | 입력값 형식 검증 | `validator` crate |

pub mod users;

pub use users::*;
