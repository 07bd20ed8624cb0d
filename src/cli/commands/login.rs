use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Handle the `login` command: exchange credentials for a token, then commit
/// it to the session (memory + durable storage) only if it decodes.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let api = ApiClient::new(cfg)?;
        let issued = api.sign_in(email, password)?;

        session.login(&issued.access_token)?;

        match session.identity().and_then(|id| id.full_name.clone()) {
            Some(name) => messages::success(format!("Logged in as {} ({})", name, email)),
            None => messages::success(format!("Logged in as {}", email)),
        }
        if session.is_admin() {
            messages::info("Administrator role active");
        }
    }

    Ok(())
}
