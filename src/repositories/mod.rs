//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`로 주입받은 저장소만 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(database));
//! let count = users.count_by_mobile("13900001111").await?;
//! ```

pub mod users;
