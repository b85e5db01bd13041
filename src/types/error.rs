use thiserror::Error;

/// calheat error types
#[derive(Error, Debug)]
pub enum HeatmapError {
    /// Failed to parse observations, dates or colors
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Writing the rendered output failed
    #[error("output error: {0}")]
    Output(String),
}

/// Result type alias for calheat
pub type Result<T> = std::result::Result<T, HeatmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatmapError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_config_error_display() {
        let err = HeatmapError::Config("unsupported selector: a > b".into());
        assert_eq!(err.to_string(), "config error: unsupported selector: a > b");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HeatmapError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
