//! 토큰 발급(로그인) 핸들러
//!
//! `POST /authorizations/` - 사용자명과 비밀번호를 확인하고 세션 토큰을 발급합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    domain::dto::users::request::LoginRequest,
    errors::{AppError, FieldErrors},
    services::users::UserService,
};

/// 로그인 핸들러
///
/// # Responses
///
/// * `200 OK` - `{ token, user_id, username }`
/// * `400 Bad Request` - 누락된 필드
/// * `401 Unauthorized` - 잘못된 자격 증명 또는 비활성 계정
#[post("")]
pub async fn obtain_token(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::Invalid(FieldErrors::from(&e)))?;

    let response = service.login(&payload.username, &payload.password).await?;

    log::info!("로그인 성공 - 사용자: {}, ID: {}", response.username, response.user_id);

    Ok(HttpResponse::Ok().json(response))
}
