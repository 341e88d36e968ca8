/*! Integration tests for Galleria.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - ordering: Tests for the OrderEngine (candidate computation, re-spacing, persistence step)
 * - backend: Tests for the InMemory store and the ItemStore contract semantics
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("galleria=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod backend;
