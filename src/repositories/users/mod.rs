//! 사용자 리포지토리 모듈
//!
//! - [`user_store`] - 저장소 인터페이스와 쓰기 에러
//! - [`user_repo`] - MongoDB 구현
//! - [`memory_repo`] - 메모리 구현

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::{StoreError, UserStore};
pub use user_repo::UserRepository;
pub use memory_repo::InMemoryUserStore;
