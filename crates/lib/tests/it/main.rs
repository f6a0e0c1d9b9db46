/*! Integration tests for loose-deep-equal.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for Value, Object, Class, Function and Pattern construction
 * - compare: Tests for the comparator, organized by value shape
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("loose_deep_equal=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}
