pub mod error;
pub mod fetch;
pub mod models;

pub use error::*;
pub use fetch::*;
pub use models::*;
