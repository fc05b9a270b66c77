pub type TitleResult<T> = Result<T, TitleError>;

#[derive(thiserror::Error, Debug)]
pub enum TitleError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("write error: {0}")]
    Write(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TitleError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(TitleError::parse("x").to_string().contains("parse error:"));
        assert!(
            TitleError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(TitleError::render("x").to_string().contains("render error:"));
        assert!(TitleError::write("x").to_string().contains("write error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = TitleError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
