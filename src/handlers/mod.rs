//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 파이프라인, 해싱, 토큰           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Caching - MongoDB, Redis        ← Data Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`를 추출하여 서비스에 위임하고,
//! `AppError`는 `ResponseError` 구현으로 HTTP 응답이 됩니다.
//!
//! - **`users`**: 회원가입, 사용자명/휴대폰 번호 중복 확인
//! - **`auth`**: 사용자명/비밀번호 로그인

pub mod users;
pub mod auth;
