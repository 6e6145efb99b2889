use slack2discord::core::config::{AppConfig, LogFormat};
use slack2discord::{setup_logging, setup_logging_with};

#[test]
fn test_logging_setup() {
    // Neither the first install nor a repeated one should panic
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging_with(&AppConfig {
            log_format: LogFormat::Pretty,
            log_filter: "slack2discord=debug".to_string(),
        });
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_with_bad_filter() {
    let result = std::panic::catch_unwind(|| {
        setup_logging_with(&AppConfig {
            log_format: LogFormat::Json,
            log_filter: "=[not a directive".to_string(),
        });
    });

    assert!(result.is_ok(), "an invalid filter should fall back, not panic");
}
