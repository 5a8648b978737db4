pub type AdforgeResult<T> = Result<T, AdforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum AdforgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdforgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            AdforgeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            AdforgeError::generation("x")
                .to_string()
                .contains("generation error:")
        );
        assert!(
            AdforgeError::render("x")
                .to_string()
                .contains("render error:")
        );
        assert!(
            AdforgeError::encode("x")
                .to_string()
                .contains("encode error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = AdforgeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
