// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use tracing::Level;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let verbose = args.contains(["-v", "--verbose"]);
    init_tracing(if verbose { Level::DEBUG } else { Level::INFO });

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        config_dir: parse_opt(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, error = %err, "invalid command line option");
        None
    })
}

fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt().with_max_level(level).finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}
