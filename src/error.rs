#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Params(String),
}

pub type SdkResult<T> = std::result::Result<T, Error>;
