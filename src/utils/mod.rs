//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`patterns`] - 사용자명/휴대폰 번호 패턴 검사와 로그용 마스킹
//!
//! # Examples
//!
//! ```rust
//! use mall_users_service::utils::patterns::{is_valid_mobile, mask_mobile};
//!
//! assert!(is_valid_mobile("13900001111"));
//! assert_eq!(mask_mobile("13900001111"), "139****1111");
//! ```

pub mod patterns;
