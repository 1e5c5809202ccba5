#![forbid(unsafe_code)]

pub mod completion;
pub mod error;
pub mod model;
pub mod notice;
pub mod time;
pub mod validate;

pub use completion::{CompletionError, CompletionTracker, Marked};
pub use error::Error;
pub use notice::{Notice, NoticeKind, Notifier};
pub use time::Clock;
pub use validate::{FailureCategory, ValidationFailure, ValidationRule, check, validate};
