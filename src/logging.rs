// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! Verbosity follows the `MOTION_KIT_LOG` environment variable using
//! `EnvFilter` directives (e.g. `motion_kit=debug`). Without it only
//! warnings and errors are printed.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "MOTION_KIT_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed by an embedding process wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .try_init();
    });
}
