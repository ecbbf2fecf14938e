// SPDX-License-Identifier: MPL-2.0
use motion_kit::app::{self, paths, Flags};
use motion_kit::logging;

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        }),
    };

    for extra in args.finish() {
        tracing::warn!(arg = ?extra, "unexpected argument");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
