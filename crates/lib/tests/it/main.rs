/*! Integration tests for bracketform.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for decoding trees from JSON
 * - registry: Tests for the FieldTypeRegistry and custom field types
 * - serializer: Tests for traversal, naming, options and errors
 * - render: Tests for hidden input and urlencoded output
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("bracketform=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod registry;
