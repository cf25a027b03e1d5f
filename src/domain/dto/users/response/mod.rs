//! 사용자 응답 DTO 모듈
//!
//! 응답 DTO는 저장된 엔티티와 별개의 구조체이며, 비밀번호 해시나
//! 요청 전용 필드(`password2`, `sms_code`, `allow`)를 절대 포함하지 않습니다.

pub mod user_response;

pub use user_response::{MobileCountResponse, RegisteredUserResponse, TokenResponse, UsernameCountResponse};
