//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 중복 확인, 로그인 인증의 비즈니스 로직을 담당합니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! RegisterUserRequest
//!        │ into_form()            ── 필드 형식 (FieldFormat)
//!        ▼
//! RegistrationForm
//!        │ check_form()           ── 약관 동의 → 비밀번호 일치
//!        ▼
//! VerificationCodeStore::sms_code ── 인증번호 없음 / 불일치
//!        │
//!        ▼
//! bcrypt 해싱 (blocking 스레드)
//!        │
//!        ▼
//! UserStore::create               ── 유니크 충돌 (username / mobile)
//!        │
//!        ▼
//! TokenService::issue → RegisteredUserResponse
//! ```
//!
//! 유니크 제약은 저장소의 쓰기 결과로만 판단합니다. 동시에 들어온 같은 사용자명의
//! 가입 요청 중 정확히 하나만 성공합니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost, 평문 비밀번호는 저장하지 않음
//! - **로그 마스킹**: 휴대폰 번호는 가운데 4자리를 가려서 기록
//! - **인증번호 보존**: 검증에 사용한 인증번호를 삭제하지 않음 (만료는 캐시 TTL에 위임)

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;

use crate::{
    caching::VerificationCodeStore,
    domain::{
        dto::users::{
            request::RegisterUserRequest,
            response::{MobileCountResponse, RegisteredUserResponse, TokenResponse, UsernameCountResponse},
        },
        entities::users::{NewUser, User},
    },
    errors::{AppError, ErrorContext},
    repositories::users::UserStore,
    services::{
        auth::TokenService,
        users::registration::{check_form, check_sms_code, RegistrationForm},
    },
    utils::patterns::mask_mobile,
};

const INVALID_CREDENTIALS: &str = "unable to log in with provided credentials";

/// 사용자 관리 서비스
///
/// 저장소와 인증번호 저장소는 trait 객체로 주입되므로
/// 운영 환경에서는 MongoDB/Redis, 테스트에서는 메모리 구현을 사용합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(UserRepository::new(database)),
///     Arc::new(RedisVerificationStore::new(redis)),
///     Arc::new(TokenService::from_env()),
///     PasswordConfig::bcrypt_cost(),
/// );
///
/// let response = service.register(request).await?;
/// ```
pub struct UserService {
    users: Arc<dyn UserStore>,
    codes: Arc<dyn VerificationCodeStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        codes: Arc<dyn VerificationCodeStore>,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            codes,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자 등록
    ///
    /// 모든 검증을 통과한 경우에만 사용자를 저장하고, 저장된 사용자에 대한
    /// 세션 토큰을 함께 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Invalid` - 필드 형식, 약관 미동의, 비밀번호 불일치,
    ///   인증번호 없음/불일치, 사용자명 또는 휴대폰 번호 중복
    /// * `AppError::RedisError` - 인증번호 저장소 접근 실패
    /// * `AppError::DatabaseError` - 사용자 저장 실패
    /// * `AppError::InternalError` - 해싱 또는 토큰 서명 실패
    pub async fn register(&self, request: RegisterUserRequest) -> Result<RegisteredUserResponse, AppError> {
        let start_time = Instant::now();

        let form = self.validate_registration(request).await?;

        let password_hash = self.hash_password(form.password).await?;

        let user = self.users
            .create(NewUser {
                username: form.username,
                mobile: form.mobile,
                password_hash,
            })
            .await
            .map_err(|e| {
                log::warn!("사용자 저장 거부: {}", e);
                AppError::from(e)
            })?;

        let token = self.tokens.issue(&user)?;

        log::info!(
            "회원가입 완료: id={}, username={}, mobile={} ({:?})",
            user.id_string().unwrap_or_default(),
            user.username,
            mask_mobile(&user.mobile),
            start_time.elapsed()
        );

        Ok(RegisteredUserResponse::new(user, token))
    }

    /// 회원가입 입력을 순서대로 검증합니다.
    ///
    /// 형식 → 약관 동의 → 비밀번호 일치 → 인증번호 순이며, 처음 실패한 규칙 하나만 보고합니다.
    /// 저장소에는 아무것도 쓰지 않습니다.
    pub async fn validate_registration(&self, request: RegisterUserRequest) -> Result<RegistrationForm, AppError> {
        let form = request.into_form()?;

        if let Err(e) = check_form(&form) {
            log::warn!("회원가입 거부 (mobile={}): {}", mask_mobile(&form.mobile), e);
            return Err(e.into());
        }

        let stored = self.codes.sms_code(&form.mobile).await?;
        if let Err(e) = check_sms_code(stored.as_deref(), &form.sms_code) {
            log::warn!("회원가입 거부 (mobile={}): {}", mask_mobile(&form.mobile), e);
            return Err(e.into());
        }

        Ok(form)
    }

    /// 사용자명 중복 확인
    pub async fn count_usernames(&self, username: &str) -> Result<UsernameCountResponse, AppError> {
        let count = self.users.count_by_username(username).await?;

        Ok(UsernameCountResponse {
            username: username.to_string(),
            count,
        })
    }

    /// 휴대폰 번호 중복 확인
    pub async fn count_mobiles(&self, mobile: &str) -> Result<MobileCountResponse, AppError> {
        let count = self.users.count_by_mobile(mobile).await?;

        Ok(MobileCountResponse {
            mobile: mobile.to_string(),
            count,
        })
    }

    /// 사용자명/비밀번호 인증
    ///
    /// 존재하지 않는 사용자, 잘못된 비밀번호, 비활성 계정은 모두 같은 메시지의
    /// `AppError::AuthenticationError`로 응답합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패: 존재하지 않는 사용자 {}", username);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")?;

        if !is_valid || !user.is_active {
            log::warn!("로그인 실패: {}", username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// 인증 후 세션 토큰 발급
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AppError> {
        let user = self.authenticate(username, password).await?;
        let token = self.tokens.issue(&user)?;

        Ok(TokenResponse {
            token,
            user_id: user.id_string().unwrap_or_default(),
            username: user.username,
        })
    }

    /// bcrypt 해싱은 CPU를 오래 점유하므로 blocking 스레드 풀에서 실행합니다.
    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let hash_start = Instant::now();
        let cost = self.bcrypt_cost;

        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;

        log::info!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }
}
