use thiserror::Error;

/// Failure reading or writing the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_converts_and_chains() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Settings parse error"));
        assert!(err.source().is_some());
    }
}
