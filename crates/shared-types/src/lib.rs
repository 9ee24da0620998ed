pub mod config;
pub mod error;
pub mod pagination;
pub mod requests;
pub mod student;

pub use config::*;
pub use error::*;
pub use pagination::*;
pub use requests::*;
pub use student::*;
