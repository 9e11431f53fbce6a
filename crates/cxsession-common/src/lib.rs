pub mod errors;
pub mod id;

pub use errors::{ConfigError, CxError};
pub use id::{new_id, SessionKey};

pub type Result<T> = std::result::Result<T, CxError>;
