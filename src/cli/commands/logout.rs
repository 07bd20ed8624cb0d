use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Handle the `logout` command. Idempotent: logging out of an anonymous
/// session is not an error.
pub fn handle(session: &mut Session) -> AppResult<()> {
    session.logout();
    messages::success("Logged out");
    Ok(())
}
