use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Handle the `whoami` command: print the identity decoded from the stored
/// token, without any network call. An anonymous session is reported, not
/// treated as an error.
pub fn handle(session: &Session) -> AppResult<()> {
    match session.identity() {
        Some(identity) => {
            messages::info("Current session:");
            messages::detail("Subject", &identity.subject);
            if let Some(name) = &identity.full_name {
                messages::detail("Name", name);
            }
            messages::detail(
                "Roles",
                if identity.roles.is_empty() {
                    "(none)".to_string()
                } else {
                    identity.roles.join(", ")
                },
            );
            messages::detail("Admin", session.is_admin());
        }
        None => {
            messages::warning("Not logged in (anonymous session)");
        }
    }

    Ok(())
}
