//! 报修域:存储、提交流程、管理报表
//!
//! - [`store`]: shared in-memory collection with lifecycle validation
//! - [`submit`]: draft validation, classification and record resolution
//! - [`insights`]: on-demand aggregation for the admin dashboard

pub mod insights;
pub mod store;
pub mod submit;

pub use store::{ComplaintStore, StoreError, StoreResult};
pub use submit::SubmissionService;
