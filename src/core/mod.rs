pub mod error;
pub mod types;
pub mod workflow;

pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use types::{ErrorCategory, ErrorSeverity};
