//! # User Registration HTTP Handlers
//!
//! 회원가입과 가입 전 중복 확인 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users/` | 회원가입 | 201 Created |
//! | `GET` | `/usernames/{username}/count/` | 사용자명 중복 확인 | 200 OK |
//! | `GET` | `/mobiles/{mobile}/count/` | 휴대폰 번호 중복 확인 | 200 OK |
//!
//! 끝의 `/`는 `NormalizePath::trim` 미들웨어가 제거하므로 라우트는 슬래시 없이 선언합니다.
//! 경로 세그먼트가 패턴(`\w{5,20}`, `1[3-9]\d{9}`)에 맞지 않으면 라우트가 없는 것과
//! 같이 404로 응답합니다.
//!
//! ## 에러 응답
//!
//! 검증 실패는 필드 이름을 키로 하는 메시지 목록으로 응답합니다.
//!
//! ```json
//! { "sms_code": ["verification code incorrect"] }
//! ```

use actix_web::{get, post, web, HttpResponse};

use crate::{
    domain::dto::users::request::RegisterUserRequest,
    errors::AppError,
    services::users::UserService,
    utils::patterns::{is_valid_mobile, is_valid_username_segment},
};

/// 회원가입 핸들러
///
/// # Responses
///
/// * `201 Created` - `{ id, username, mobile, token }`
/// * `400 Bad Request` - 필드별 검증 에러 맵
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users/ \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice1","mobile":"13900001111","password":"password1",
///        "password2":"password1","sms_code":"123456","allow":"true"}'
/// ```
#[post("")]
pub async fn register_user(
    service: web::Data<UserService>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자명 중복 확인
///
/// ```bash
/// curl http://localhost:8080/usernames/alice1/count/
/// # {"username":"alice1","count":1}
/// ```
#[get("/{username}/count")]
pub async fn username_count(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !is_valid_username_segment(&username) {
        return Err(AppError::NotFound(format!("no route for username {}", username)));
    }

    let response = service.count_usernames(&username).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 휴대폰 번호 중복 확인
#[get("/{mobile}/count")]
pub async fn mobile_count(
    service: web::Data<UserService>,
    mobile: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !is_valid_mobile(&mobile) {
        return Err(AppError::NotFound("no route for mobile".to_string()));
    }

    let response = service.count_mobiles(&mobile).await?;
    Ok(HttpResponse::Ok().json(response))
}
