//! 캐싱 계층 모듈
//!
//! SMS 인증번호가 저장된 Redis 캐시에 대한 읽기 전용 접근을 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - `sms_<mobile>` 키 기반 인증번호 조회
//! - 테스트용 메모리 저장소
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::caching::{RedisClient, RedisVerificationStore, VerificationCodeStore};
//!
//! let redis = Arc::new(RedisClient::new().await?);
//! let store = RedisVerificationStore::new(redis);
//! let code = store.sms_code("13900001111").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
pub mod verification;

pub use self::redis::RedisClient;
pub use verification::{
    sms_code_key, InMemoryVerificationStore, RedisVerificationStore, VerificationCodeStore,
};
