use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the API base url
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing volmgr…");

    Config::init_all(cli.api_url.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 volmgr initialization completed!");
    Ok(())
}
