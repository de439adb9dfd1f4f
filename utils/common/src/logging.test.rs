use super::*;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

#[test]
fn test_configurable_timer_utc_suffix() {
    let timer = ConfigurableTimer::new(TimezoneConfig::Utc);
    let mut buf = String::new();
    let mut writer = Writer::new(&mut buf);
    timer.format_time(&mut writer).unwrap();
    assert!(buf.ends_with('Z'));
}

#[test]
fn test_configurable_timer_local() {
    let timer = ConfigurableTimer::new(TimezoneConfig::Local);
    let mut buf = String::new();
    let mut writer = Writer::new(&mut buf);
    timer.format_time(&mut writer).unwrap();
    assert!(!buf.is_empty());
}

#[test]
fn test_build_env_filter_with_modules() {
    let logging = LoggingConfig {
        level: "warn".to_string(),
        modules: vec!["toolcall_stream=debug".to_string()],
        ..Default::default()
    };
    let filter = build_env_filter(&logging, "error");
    let filter_str = format!("{filter:?}");
    assert!(filter_str.contains("toolcall_stream") || filter_str.contains("debug"));
}

#[test]
fn test_logging_config_from_json() {
    let config: LoggingConfig =
        serde_json::from_str(r#"{"level": "debug", "timezone": "utc"}"#).unwrap();
    assert_eq!(config.level, "debug");
    assert_eq!(config.timezone, TimezoneConfig::Utc);
    assert!(config.modules.is_empty());
}
