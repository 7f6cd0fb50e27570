pub type PagedriftResult<T> = Result<T, PagedriftError>;

#[derive(thiserror::Error, Debug)]
pub enum PagedriftError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("timeline error: {0}")]
    Timeline(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PagedriftError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PagedriftError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PagedriftError::timeline("x")
                .to_string()
                .contains("timeline error:")
        );
        assert!(
            PagedriftError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PagedriftError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
