//! # Redis 캐시 클라이언트 구현
//!
//! 인증번호 캐시로 사용하는 Redis 서버와의 연결을 담당합니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 효율적으로 처리합니다.
//!
//! ## 값 형식
//!
//! 인증번호는 SMS 발송 측에서 JSON이 아닌 평문 바이트로 저장하므로,
//! 이 클라이언트는 값을 UTF-8 문자열로 그대로 읽어옵니다.

use redis::{AsyncCommands, Client};

use crate::config::CacheConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new().await?;
/// let code: Option<String> = redis.get_string("sms_13900001111").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 환경 변수 `REDIS_URL`에서 Redis 서버 주소를 읽어오며,
    /// 설정되지 않은 경우 기본값 `redis://localhost:6379`를 사용합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        Self::connect(&CacheConfig::redis_url()).await
    }

    /// 지정된 URL로 연결하고 PING 명령으로 서버 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - Redis 서버에 연결할 수 없는 경우
    /// - 잘못된 URL 형식
    /// - 인증 실패
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        let redis = Self { client };

        redis.ping().await?;
        log::info!("✅ Redis 연결 성공");

        Ok(redis)
    }

    /// 서버에 PING을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await
    }

    /// 지정된 키의 값을 문자열로 조회합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(String))` - 키가 존재함
    /// - `Ok(None)` - 키가 없거나 만료됨
    /// - `Err(RedisError)` - 연결 오류 또는 값이 UTF-8이 아님
    ///
    /// ## 성능 특성
    ///
    /// - **시간 복잡도**: O(1)
    /// - **네트워크**: 1회 왕복
    pub async fn get_string(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<Vec<u8>> = conn.get(key).await?;

        value
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Value is not valid UTF-8",
                        e.to_string(),
                    ))
                })
            })
            .transpose()
    }
}
