//! `SKIP_TEST_CLUSTER` policy for suites backed by embedded PostgreSQL.

/// True when `SKIP_TEST_CLUSTER` is `1`, `true`, or `yes` (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .is_ok_and(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
}

/// Turn a cluster bootstrap failure into a skip or a hard failure.
///
/// Returns `None` after printing a skip marker when skipping is enabled.
/// Panics otherwise so a broken CI image is never reported as green.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("embedded PostgreSQL failed to start: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
