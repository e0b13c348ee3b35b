use docroster::logging::{init_logging, LoggingError};

// One test only: the logger is process-global and each test binary is its own process.
#[test]
fn init_is_idempotent_and_rejects_level_switch() {
    assert!(matches!(
        init_logging("verbose"),
        Err(LoggingError::UnsupportedLevel(_))
    ));

    init_logging("debug").expect("first init");
    init_logging(" DEBUG ").expect("same level again");

    assert_eq!(
        init_logging("warn"),
        Err(LoggingError::LevelConflict {
            current: "debug",
            requested: "warn",
        })
    );

    log::info!("event=test_log module=tests status=ok");
}
