//! Shared helpers for integration suites that need a live PostgreSQL.

mod cluster_skip;
mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::test_cluster;
