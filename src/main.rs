// SPDX-License-Identifier: MPL-2.0
use gallery_submit::app::{self, paths, Flags};
use gallery_submit::logging;

const HELP: &str = "\
gallery_submit - browse a remote gallery and submit contact details

USAGE:
    gallery_submit [OPTIONS]

OPTIONS:
    --lang <LOCALE>         UI language (e.g. en-US, fr)
    --config-dir <DIR>      Directory holding settings.toml
    --base-url <URL>        Backend origin, overrides [backend] base_url
    --log-level <FILTER>    tracing filter, overrides RUST_LOG
    -h, --help              Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        base_url: args.opt_value_from_str("--base-url")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(flags.log_level.as_deref());
    paths::init_cli_overrides(flags.config_dir.clone());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}
