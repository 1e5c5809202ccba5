use thiserror::Error;

use crate::completion::CompletionError;
use crate::model::ParseIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
