// SPDX-License-Identifier: MPL-2.0
use folio_reel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
FolioReel - speaker portfolio with talk galleries

USAGE:
  folio_reel [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --catalog <FILE>        TOML catalog replacing the builtin talks
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_reel=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        }),
        catalog: args
            .opt_value_from_os_str("--catalog", |value| {
                Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(value))
            })
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring --catalog");
                None
            }),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "unused command line arguments");
    }

    app::run(flags)
}
