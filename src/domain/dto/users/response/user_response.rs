use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 회원가입 성공 응답 DTO
///
/// 저장된 사용자와 새로 발급한 세션 토큰을 조합해 만듭니다.
/// 엔티티에 토큰을 덧붙이지 않고 별도 구조체로 구성합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUserResponse {
    pub id: String,
    pub username: String,
    pub mobile: String,
    pub token: String,
}

impl RegisteredUserResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            mobile: user.mobile,
            token,
        }
    }
}

/// 사용자명 중복 확인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameCountResponse {
    pub username: String,
    pub count: u64,
}

/// 휴대폰 번호 중복 확인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileCountResponse {
    pub mobile: String,
    pub count: u64,
}

/// 토큰 발급(로그인) 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
}
