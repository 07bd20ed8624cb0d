use crate::api::ApiClient;
use crate::cli::parser::RoleAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;
use crate::utils::formatting::{opt_str, truncate};
use crate::utils::table::{Column, Table};

/// Handle the `role` subcommands. Gated on the administrator role
/// client-side as a convenience; the backend enforces it regardless.
pub fn handle(action: &RoleAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_admin()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    match action {
        RoleAction::List => {
            let roles = api.list_roles()?;

            let mut table = Table::new(vec![
                Column::new("ID", 6),
                Column::new("NAME", 20),
                Column::new("DESCRIPTION", 40),
            ]);

            for r in &roles {
                table.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    truncate(&opt_str(&r.description), 40),
                ]);
            }

            print!("{}", table.render());
        }

        RoleAction::Assign { user_id, role_id } => {
            api.assign_role(*user_id, *role_id)?;
            messages::success(format!("Assigned role {} to user {}", role_id, user_id));
        }

        RoleAction::Revoke { user_id, role_id } => {
            api.revoke_role(*user_id, *role_id)?;
            messages::success(format!("Revoked role {} from user {}", role_id, user_id));
        }
    }

    Ok(())
}
