//! Suite lifecycle helpers
//!
//! The test harness calls these explicitly instead of relying on
//! framework-managed global hooks: [`setup`] is idempotent and safe to
//! call from every test, [`teardown`] is for harnesses that own the
//! whole run. There is no shared mutable suite state to tear down -
//! every test builds its own service - so both are observability
//! points, not resource managers.

use std::sync::Once;

use tracing::debug;

static SUITE_SETUP: Once = Once::new();

/// Run once-per-suite setup. Subsequent calls are no-ops.
pub fn setup() {
    SUITE_SETUP.call_once(|| {
        debug!("suite setup");
    });
}

/// Run once-per-suite teardown.
pub fn teardown() {
    debug!("suite teardown");
}

/// Whether the environment asked for the suite to be skipped.
///
/// Set `USERDIR_SKIP_TESTS` to any value to request a skip; tests
/// check this and return early.
pub fn skip_requested() -> bool {
    std::env::var_os("USERDIR_SKIP_TESTS").is_some()
}
