use sedotmp_client::utils::logger::{parse_log_level, setup_logger};
use tracing::Level;

#[test]
fn parses_known_levels() {
    assert_eq!(parse_log_level("trace"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
    assert_eq!(parse_log_level(" warn "), Level::WARN);
    assert_eq!(parse_log_level("warning"), Level::WARN);
    assert_eq!(parse_log_level("Error"), Level::ERROR);
}

#[test]
fn unknown_level_defaults_to_info() {
    assert_eq!(parse_log_level("verbose"), Level::INFO);
    assert_eq!(parse_log_level(""), Level::INFO);
}

#[test]
fn setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    tracing::info!("logger installed");
}
