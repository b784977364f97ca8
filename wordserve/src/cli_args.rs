use std::path::PathBuf;
use argh::FromArgs;

fn default_config_path() -> PathBuf {
    PathBuf::from("./wordserve.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "serve A records for triple-word names, or translate a real domain into one")]
pub struct CliArgs {
    #[argh(
        option,
        short = 't',
        description = "a domain to translate to its triple-word representation"
    )]
    pub translate: Option<String>,

    #[argh(switch, short = 's', description = "start the DNS server")]
    pub serve: bool,

    #[argh(
        option,
        description = "config file path, default: './wordserve.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,
}
