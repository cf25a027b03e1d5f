//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/users/` | [`handlers::users::register_user`] |
//! | `GET` | `/usernames/{username}/count/` | [`handlers::users::username_count`] |
//! | `GET` | `/mobiles/{mobile}/count/` | [`handlers::users::mobile_count`] |
//! | `POST` | `/authorizations/` | [`handlers::auth::obtain_token`] |
//!
//! 모든 라우트는 인증 없이 접근할 수 있습니다.
//! 라우트는 끝 슬래시 없이 선언되며 `NormalizePath::trim`과 함께 사용해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{middleware::NormalizePath, web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .wrap(NormalizePath::trim())
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 `AppError`를 거쳐 동일한 에러 응답 형식으로 변환합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 회원가입 및 중복 확인 라우트
///
/// ```bash
/// curl http://localhost:8080/usernames/alice1/count/
/// curl http://localhost:8080/mobiles/13900001111/count/
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::register_user)
    );

    cfg.service(
        web::scope("/usernames")
            .service(handlers::users::username_count)
    );

    cfg.service(
        web::scope("/mobiles")
            .service(handlers::users::mobile_count)
    );
}

/// 토큰 발급 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/authorizations/ \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice1","password":"password1"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/authorizations")
            .service(handlers::auth::obtain_token)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "mall_users_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis"
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, middleware::NormalizePath, test, App};
    use serde_json::Value;

    use super::*;
    use crate::{
        caching::InMemoryVerificationStore,
        repositories::users::InMemoryUserStore,
        services::{auth::TokenService, users::UserService},
    };

    fn user_service(codes: Arc<InMemoryVerificationStore>) -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(InMemoryUserStore::new()),
            codes,
            Arc::new(TokenService::new("test-secret", 1)),
            4,
        ))
    }

    fn registration(sms_code: &str) -> Value {
        json!({
            "username": "alice1",
            "mobile": "13900001111",
            "password": "password1",
            "password2": "password1",
            "sms_code": sms_code,
            "allow": "true"
        })
    }

    macro_rules! init_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .wrap(NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_register_then_count() {
        let codes = Arc::new(InMemoryVerificationStore::new());
        codes.insert("13900001111", "123456");
        let service = user_service(codes);
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(registration("123456"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["username"], "alice1");
        assert_eq!(body["mobile"], "13900001111");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
        assert!(body.get("password").is_none());

        let req = test::TestRequest::get().uri("/usernames/alice1/count/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "username": "alice1", "count": 1 }));

        let req = test::TestRequest::get().uri("/mobiles/13900001111/count/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "mobile": "13900001111", "count": 1 }));
    }

    #[actix_web::test]
    async fn test_register_with_incorrect_code() {
        let codes = Arc::new(InMemoryVerificationStore::new());
        codes.insert("13900001111", "654321");
        let service = user_service(codes);
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(registration("123456"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "sms_code": ["verification code incorrect"] }));

        let req = test::TestRequest::get().uri("/usernames/alice1/count/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn test_register_with_malformed_json() {
        let service = user_service(Arc::new(InMemoryVerificationStore::new()));
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/users/")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_register_with_numeric_sms_code() {
        let codes = Arc::new(InMemoryVerificationStore::new());
        codes.insert("13900001111", "123456");
        let service = user_service(codes);
        let app = init_app!(service);

        let mut body = registration("123456");
        body["sms_code"] = json!(123456);

        let req = test::TestRequest::post().uri("/users/").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_register_with_wrong_field_types() {
        let codes = Arc::new(InMemoryVerificationStore::new());
        codes.insert("13900001111", "123456");
        let service = user_service(codes);
        let app = init_app!(service);

        let mut body = registration("123456");
        body["password2"] = Value::Null;
        body["allow"] = json!(true);

        let req = test::TestRequest::post().uri("/users/").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "allow": ["not a valid string"],
                "password2": ["this field may not be null"]
            })
        );
    }

    #[actix_web::test]
    async fn test_count_segments_must_match_patterns() {
        let service = user_service(Arc::new(InMemoryVerificationStore::new()));
        let app = init_app!(service);

        for uri in [
            "/mobiles/12345/count/",
            "/mobiles/12900001111/count/",
            "/usernames/abcd/count/",
            "/usernames/abcdefghijklmnopqrstu/count/",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_obtain_token() {
        let codes = Arc::new(InMemoryVerificationStore::new());
        codes.insert("13900001111", "123456");
        let service = user_service(codes);
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(registration("123456"))
            .to_request();
        let registered: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/authorizations/")
            .set_json(json!({ "username": "alice1", "password": "password1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], registered["id"]);

        let req = test::TestRequest::post()
            .uri("/authorizations/")
            .set_json(json!({ "username": "alice1", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let service = user_service(Arc::new(InMemoryVerificationStore::new()));
        let app = init_app!(service);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }
}
