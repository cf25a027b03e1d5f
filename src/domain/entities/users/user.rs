//! User Entity Implementation
//!
//! 회원가입으로 생성되는 사용자 엔티티입니다.
//! 비밀번호는 bcrypt 해시로만 보관하며 평문은 저장하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `username`과 `mobile`은 각각 전역적으로 유니크하며,
/// 저장소의 유니크 인덱스가 이를 보장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 5-20자)
    pub username: String,
    /// 휴대폰 번호 (unique, `1[3-9]\d{9}`)
    pub mobile: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 가입 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 저장 전의 새 사용자를 생성합니다. ID는 저장소가 할당합니다.
    pub fn new(new_user: NewUser) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: new_user.username,
            mobile: new_user.mobile,
            password_hash: new_user.password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 저장소에 생성을 요청할 사용자 데이터
///
/// 해싱이 끝난 비밀번호만 받으므로 평문 비밀번호가 저장 계층으로 넘어갈 수 없습니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub mobile: String,
    pub password_hash: String,
}
