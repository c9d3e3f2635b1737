use kennel_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

#[test]
#[serial]
fn init_twice_returns_subscriber_error() {
    let logger = Logger::builder("kennel-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    let err = Logger::builder("kennel-init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init"
    );
}
