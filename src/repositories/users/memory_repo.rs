//! 메모리 기반 사용자 저장소
//!
//! 외부 MongoDB 없이 서비스와 HTTP 계층을 검증하기 위한 구현입니다.
//! MongoDB 유니크 인덱스와 같은 규칙으로 중복을 거부합니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::entities::users::{NewUser, User},
    errors::{AppError, UniqueField},
    repositories::users::user_store::{StoreError, UserStore},
};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 전체의 스냅샷
    pub fn users(&self) -> Vec<User> {
        self.users.read().map(|users| users.clone()).unwrap_or_default()
    }

    fn poisoned() -> AppError {
        AppError::InternalError("user store lock poisoned".to_string())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        // 검사와 삽입이 같은 쓰기 잠금 안에서 일어나므로 유니크 인덱스와 동일하게 동작
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::Conflict(UniqueField::Username));
        }
        if users.iter().any(|u| u.mobile == new_user.mobile) {
            return Err(StoreError::Conflict(UniqueField::Mobile));
        }

        let mut user = User::new(new_user);
        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn count_by_username(&self, username: &str) -> Result<u64, AppError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().filter(|u| u.username == username).count() as u64)
    }

    async fn count_by_mobile(&self, mobile: &str) -> Result<u64, AppError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().filter(|u| u.mobile == mobile).count() as u64)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, mobile: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            mobile: mobile.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_counts() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("alice1", "13900001111")).await.unwrap();

        assert!(user.id.is_some());
        assert_eq!(store.count_by_username("alice1").await.unwrap(), 1);
        assert_eq!(store.count_by_mobile("13900001111").await.unwrap(), 1);
        assert_eq!(store.count_by_username("bob01").await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_create_rejects_duplicates() {
        let store = InMemoryUserStore::new();
        store.create(new_user("alice1", "13900001111")).await.unwrap();

        let by_username = store.create(new_user("alice1", "13900002222")).await;
        assert!(matches!(by_username, Err(StoreError::Conflict(UniqueField::Username))));

        let by_mobile = store.create(new_user("bob001", "13900001111")).await;
        assert!(matches!(by_mobile, Err(StoreError::Conflict(UniqueField::Mobile))));

        assert_eq!(store.users().len(), 1);
    }
}
