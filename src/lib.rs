//! 쇼핑몰 회원 서비스 백엔드
//!
//! 휴대폰 인증 기반 회원가입과 가입 전 중복 확인을 제공하는 Rust 서비스입니다.
//! 회원가입이 성공하면 즉시 JWT 세션 토큰을 발급합니다.
//!
//! # Features
//!
//! - **회원가입**: 필드 형식 → 약관 동의 → 비밀번호 확인 → SMS 인증번호 순서의 검증
//! - **중복 확인**: 사용자명/휴대폰 번호별 등록 수 조회
//! - **JWT 인증**: 가입/로그인 직후 세션 토큰 발급
//! - **MongoDB**: 사용자 데이터 영구 저장, 유니크 인덱스로 중복 방지
//! - **Redis**: 외부 서비스가 기록한 SMS 인증번호 조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 파이프라인, 해싱, 토큰
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ UserStore /     │ ← trait 객체로 주입되는 저장소
//! │ CodeStore       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mall_users_service::caching::InMemoryVerificationStore;
//! use mall_users_service::repositories::users::InMemoryUserStore;
//! use mall_users_service::services::{auth::TokenService, users::UserService};
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserStore::new()),
//!     Arc::new(InMemoryVerificationStore::new()),
//!     Arc::new(TokenService::new("secret", 24)),
//!     4,
//! );
//! let response = service.register(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
