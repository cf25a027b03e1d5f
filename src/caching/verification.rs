//! SMS 인증번호 저장소
//!
//! 인증번호는 SMS 발송 측에서 `sms_<mobile>` 키로 짧은 TTL과 함께 저장합니다.
//! 이 서비스는 읽기만 하며, 사용된 인증번호의 삭제나 만료는 외부에서 처리합니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::errors::AppError;

/// 휴대폰 번호에 대한 인증번호 캐시 키
pub fn sms_code_key(mobile: &str) -> String {
    format!("sms_{}", mobile)
}

/// 인증번호 조회 인터페이스
///
/// 회원가입 서비스에 주입되며, 테스트에서는 [`InMemoryVerificationStore`]로 대체됩니다.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// 휴대폰 번호에 현재 저장된 인증번호를 반환합니다.
    ///
    /// 만료되었거나 발급된 적이 없으면 `Ok(None)`입니다.
    async fn sms_code(&self, mobile: &str) -> Result<Option<String>, AppError>;
}

/// Redis 기반 인증번호 저장소
pub struct RedisVerificationStore {
    redis: Arc<RedisClient>,
}

impl RedisVerificationStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl VerificationCodeStore for RedisVerificationStore {
    async fn sms_code(&self, mobile: &str) -> Result<Option<String>, AppError> {
        self.redis
            .get_string(&sms_code_key(mobile))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

/// 메모리 기반 인증번호 저장소 (테스트/로컬 개발용)
#[derive(Default)]
pub struct InMemoryVerificationStore {
    codes: RwLock<HashMap<String, String>>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// SMS 발송 측을 대신해 인증번호를 저장합니다.
    pub fn insert(&self, mobile: &str, code: &str) {
        if let Ok(mut codes) = self.codes.write() {
            codes.insert(sms_code_key(mobile), code.to_string());
        }
    }
}

#[async_trait]
impl VerificationCodeStore for InMemoryVerificationStore {
    async fn sms_code(&self, mobile: &str) -> Result<Option<String>, AppError> {
        let codes = self
            .codes
            .read()
            .map_err(|_| AppError::InternalError("verification store lock poisoned".to_string()))?;

        Ok(codes.get(&sms_code_key(mobile)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_code_key_format() {
        assert_eq!(sms_code_key("13900001111"), "sms_13900001111");
    }

    #[actix_web::test]
    async fn test_in_memory_store_lookup() {
        let store = InMemoryVerificationStore::new();
        store.insert("13900001111", "123456");

        assert_eq!(
            store.sms_code("13900001111").await.unwrap(),
            Some("123456".to_string())
        );
        assert_eq!(store.sms_code("13900002222").await.unwrap(), None);
    }
}
