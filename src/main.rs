// SPDX-License-Identifier: MPL-2.0
use column_wallet::app::{self, Flags};

const HELP: &str = "\
Column Wallet

USAGE:
  column_wallet [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  --network <NAME>      Network name shown in the header
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        network: args.opt_value_from_str("--network")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
