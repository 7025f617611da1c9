//! 基础设施层：存储实现与日志

pub mod database;
pub mod logger;
pub mod memory;
pub mod store;

pub use database::{DatabaseManager, PgStore};
pub use logger::Logger;
pub use memory::MemoryStore;
pub use store::{Fields, RecordStore, Row, StoreError};
