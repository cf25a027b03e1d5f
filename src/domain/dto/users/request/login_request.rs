//! 로그인 요청 DTO
//!
//! `POST /authorizations/` 본문입니다. 사용자명과 비밀번호로 세션 토큰을 발급받습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "this field is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "this field is required"))]
    pub password: String,
}
