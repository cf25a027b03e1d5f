//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                       # 클라이언트 → 서버
//! │   ├── register_user_request.rs   # 회원가입 요청
//! │   └── login_request.rs           # 토큰 발급 요청
//! └── response/                      # 서버 → 클라이언트
//!     └── user_response.rs           # 가입 결과, 중복 카운트, 토큰 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
