use parley_core::{init_observability, shutdown_observability};

#[test]
fn test_init_and_shutdown_with_default_exporter() {
    // Assumes OTEL_EXPORTER is unset or valid in the test environment.
    let result = init_observability("parley-test", 60);
    assert!(result.is_ok(), "init failed: {:?}", result.err());

    // A second install is a no-op.
    assert!(init_observability("parley-test", 60).is_ok());

    shutdown_observability();
}
