//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `username`, `mobile` 각각 유니크 인덱스로 중복 방지
//! - **충돌 매핑**: 중복 키 쓰기 에러(11000)를 `StoreError::Conflict`로 변환
//! - **카운트 조회**: 중복 확인 API를 위한 `count_documents`

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::{NewUser, User},
    errors::{AppError, UniqueField},
    repositories::users::user_store::{StoreError, UserStore},
};

const COLLECTION_NAME: &str = "users";
const USERNAME_INDEX: &str = "username_unique";
const MOBILE_INDEX: &str = "mobile_unique";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `username_unique`: username (UNIQUE)
/// - `mobile_unique`: mobile (UNIQUE)
/// - `created_at_desc`: created_at 내림차순
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
/// repo.create_indexes().await?;
///
/// let count = repo.count_by_username("alice1").await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 사용자 컬렉션에 필요한 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    ///
    /// # 주의사항
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        let mobile_index = IndexModel::builder()
            .keys(doc! { "mobile": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(MOBILE_INDEX.to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, mobile_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

/// 사용자명/휴대폰 번호 유니크 인덱스의 중복 키 에러라면 위반된 필드를 반환합니다.
///
/// `_id` 등 다른 인덱스의 중복 키 에러는 `None`이며 저장소 에러로 처리됩니다.
fn duplicate_key_field(error: &mongodb::error::Error) -> Option<UniqueField> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            field_from_duplicate_message(&write_error.message)
        }
        _ => None,
    }
}

/// 중복 키 에러 메시지의 인덱스 이름으로 필드를 판별합니다.
///
/// 메시지 형식: `E11000 duplicate key error collection: db.users index: mobile_unique dup key: {...}`
fn field_from_duplicate_message(message: &str) -> Option<UniqueField> {
    if message.contains(&format!("index: {} ", MOBILE_INDEX)) {
        Some(UniqueField::Mobile)
    } else if message.contains(&format!("index: {} ", USERNAME_INDEX)) {
        Some(UniqueField::Username)
    } else {
        None
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut user = User::new(new_user);

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| match duplicate_key_field(&e) {
                Some(field) => StoreError::Conflict(field),
                None => StoreError::Unavailable(AppError::DatabaseError(e.to_string())),
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn count_by_username(&self, username: &str) -> Result<u64, AppError> {
        self.collection()
            .count_documents(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count_by_mobile(&self, mobile: &str) -> Result<u64, AppError> {
        self.collection()
            .count_documents(doc! { "mobile": mobile })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
