// SPDX-License-Identifier: MPL-2.0
use talka_stories::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Talka stories preview

USAGE:
  talka [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --catalog <FILE>       Story catalog (TOML); built-in demo data otherwise
  --start <INDEX>        Open the viewer on this collection
  --history-dir <DIR>    Export the transition history here on close
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talka_stories=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_args(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Parses the launcher flags, rejecting anything left over.
fn parse_args(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let flags = parse_flags(&mut args).map_err(|error| error.to_string())?;
    let unknown = args.finish();
    if !unknown.is_empty() {
        let names: Vec<_> = unknown.iter().map(|arg| arg.to_string_lossy()).collect();
        return Err(format!("unknown arguments: {}", names.join(" ")));
    }
    Ok(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        start: args.opt_value_from_str("--start")?,
        history_dir: args.opt_value_from_str("--history-dir")?,
    })
}
