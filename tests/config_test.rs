use std::time::Duration;

use whirl::{Config, ElementKind, Level, Spinner};

fn build(config: Config) -> anyhow::Result<Spinner> {
    Spinner::with_writer(config, Box::new(Vec::new()))
}

#[test]
fn default_config_builds() {
    build(Config::default()).unwrap();
}

#[test]
fn invalid_settings_are_rejected_with_context() {
    let cases: Vec<(&str, Config, &str)> = vec![
        (
            "prefix too long",
            Config {
                prefix: "12345678901".to_string(),
                ..Config::default()
            },
            "prefix",
        ),
        (
            "unsupported color level",
            Config {
                color_level: Level::TrueColor,
                ..Config::default()
            },
            "not supported",
        ),
        (
            "order not unique",
            Config {
                order: [ElementKind::Char, ElementKind::Char, ElementKind::Message],
                ..Config::default()
            },
            "order",
        ),
        (
            "frame set too big",
            Config {
                frames: Some(vec!["-".to_string(); 65]),
                ..Config::default()
            },
            "too big",
        ),
        (
            "frame widths ambiguous",
            Config {
                frames: Some(vec!["0".to_string(), "  ".to_string(), "0".to_string()]),
                ..Config::default()
            },
            "ambiguous",
        ),
        (
            "interval too small",
            Config {
                interval: Some(Duration::from_millis(10)),
                ..Config::default()
            },
            "too small",
        ),
        (
            "interval too big",
            Config {
                interval: Some(Duration::from_secs(10)),
                ..Config::default()
            },
            "too big",
        ),
        (
            "ellipsis too wide",
            Config {
                message_ellipsis: "~~~~".to_string(),
                ..Config::default()
            },
            "ellipsis",
        ),
        (
            "message format without slot",
            Config {
                message_format: "plain".to_string(),
                ..Config::default()
            },
            "message_format",
        ),
    ];

    for (name, config, needle) in cases {
        let err = build(config).expect_err(name);
        let text = err.to_string();
        assert!(text.contains(needle), "{name}: error {text:?} lacks {needle:?}");
    }
}

#[test]
fn validation_failures_leave_no_spinner_behind() {
    // construction is all-or-nothing: an invalid config yields Err, never a
    // half-built spinner
    let result = build(Config {
        interval: Some(Duration::from_millis(1)),
        ..Config::default()
    });
    assert!(result.is_err());
}
