//! 사용자 저장소 인터페이스
//!
//! 서비스 계층은 이 trait에만 의존하며, 실제 구현은 시작 시점에 주입됩니다.
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`UserRepository`](super::user_repo::UserRepository) | MongoDB `users` 컬렉션 |
//! | [`InMemoryUserStore`](super::memory_repo::InMemoryUserStore) | 테스트 |

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, RegistrationError, UniqueField};

/// 저장소 쓰기 실패
#[derive(Debug, Error)]
pub enum StoreError {
    /// 유니크 제약 위반: 같은 사용자명 또는 휴대폰 번호가 이미 존재함
    #[error("unique constraint violated on {}", .0.as_str())]
    Conflict(UniqueField),

    /// 저장소 자체를 사용할 수 없음
    #[error(transparent)]
    Unavailable(#[from] AppError),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict(field) => RegistrationError::UniquenessConflict(field).into(),
            StoreError::Unavailable(inner) => inner,
        }
    }
}

/// 사용자 레코드 저장소
///
/// 유니크 제약은 쓰기 시점에 저장소가 강제해야 합니다.
/// 동시 가입 요청에서 조회 후 쓰기 방식의 사전 검사는 경쟁 상태를 막지 못하므로
/// 호출자는 `create`의 `Conflict` 결과를 유일한 판단 근거로 사용합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// 사용자명이 일치하는 레코드 수
    async fn count_by_username(&self, username: &str) -> Result<u64, AppError>;

    /// 휴대폰 번호가 일치하는 레코드 수
    async fn count_by_mobile(&self, mobile: &str) -> Result<u64, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
