//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 로그인 인증을 담당합니다.
//!
//! - [`registration`] - 회원가입 입력의 순차 검증 규칙
//! - [`user_service`] - 검증, 해싱, 저장, 토큰 발급을 묶는 서비스
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 사용자명/휴대폰 번호 유니크 제약은 저장소 쓰기 시점에 강제
//! - 로그의 휴대폰 번호 마스킹

pub mod registration;
pub mod user_service;

pub use registration::RegistrationForm;
pub use user_service::UserService;
