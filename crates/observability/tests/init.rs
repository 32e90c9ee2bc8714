//! Global subscriber installation. Its own test binary, since it sets the
//! process-wide default.

use std::sync::{Arc, Mutex};

use tipcalc_observability::{init, init_from_env, LogSink, ObservabilityConfig};

#[test]
fn init_is_idempotent() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let out = Arc::clone(&lines);
    let sink: LogSink = Arc::new(move |line| out.lock().unwrap().push(line));

    let config = ObservabilityConfig::new("tipcalc-test")
        .with_console(false)
        .with_log_level("info")
        .with_log_sink(sink);
    init(config).unwrap();
    init(ObservabilityConfig::default().with_console(false)).unwrap();
    init_from_env().unwrap();

    tracing::info!("after repeated init");
    let lines = lines.lock().unwrap();
    assert_eq!(
        lines.iter().filter(|l| l.contains("logging initialized")).count(),
        1
    );
    assert!(lines.iter().any(|l| l.contains("after repeated init")));
}
