// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage: iced_toasts [OPTIONS]

Options:
  --timeout-ms <MS>      Auto-dismiss timeout in milliseconds
  --transition-ms <MS>   Enter/exit transition duration in milliseconds
  --no-auto-dismiss      Keep notifications until dismissed
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toasts=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        timeout_ms: args.opt_value_from_str("--timeout-ms")?,
        transition_ms: args.opt_value_from_str("--transition-ms")?,
        no_auto_dismiss: args.contains("--no-auto-dismiss"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
