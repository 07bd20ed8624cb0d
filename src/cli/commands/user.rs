use crate::api::ApiClient;
use crate::cli::parser::UserAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

/// Handle the `user` subcommands (admin)
pub fn handle(action: &UserAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_admin()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    match action {
        UserAction::List => {
            let users = api.list_users()?;

            let mut table = Table::new(vec![
                Column::new("ID", 6),
                Column::new("EMAIL", 32),
                Column::new("ACTIVE", 8),
                Column::new("ROLES", 30),
            ]);

            for u in &users {
                let roles: Vec<&str> = u.roles.iter().map(|r| r.name.as_str()).collect();
                table.add_row(vec![
                    u.id.to_string(),
                    u.email.clone(),
                    if u.is_active { "yes" } else { "no" }.to_string(),
                    roles.join(", "),
                ]);
            }

            print!("{}", table.render());
            messages::info(format!("{} user(s)", users.len()));
        }
    }

    Ok(())
}
