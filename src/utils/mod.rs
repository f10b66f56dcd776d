pub mod error;
pub mod format;
pub mod fs;

pub use error::{BoxResult, NavtocError};
pub use format::DataFormat;
