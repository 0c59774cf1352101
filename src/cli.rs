use clap::Parser;

/// Browse API endpoint docs and try them out from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "apidoc-tryit", version, about, long_about = None)]
pub struct Args {
    /// Endpoint catalog: a TOML/JSON file or an http(s) URL
    pub catalog: Option<String>,

    /// API base URL used for test calls
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Bearer token used for test calls, kept in memory only
    #[arg(short, long, env = "APIDOC_TRYIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
