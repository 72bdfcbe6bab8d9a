// SPDX-License-Identifier: MPL-2.0
use quickshow::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
QuickShow

USAGE:
  quickshow [OPTIONS] [QUERY]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --token <TOKEN>        TMDB read access token
  --i18n-dir <DIR>       Directory with .ftl files overriding the built-in ones
  -h, --help             Print this help

ARGS:
  <QUERY>                Start on the search page with this query
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickshow=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let token = args.opt_value_from_str("--token")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;

    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();
    let query = (!rest.is_empty()).then(|| rest.join(" "));

    Ok(Flags {
        lang,
        config_dir,
        token,
        i18n_dir,
        query,
    })
}
