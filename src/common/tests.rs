#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_log_level;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_custom_error_display() {
        let err = CustomError::new("could not create config.toml file");
        assert_eq!(err.to_string(), "could not create config.toml file");
        assert_eq!(err.message(), "could not create config.toml file");
    }
}
