pub type SkytraceResult<T> = Result<T, SkytraceError>;

#[derive(thiserror::Error, Debug)]
pub enum SkytraceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkytraceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}
