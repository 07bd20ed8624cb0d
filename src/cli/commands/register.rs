use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::user::{Contact, UserCreate};
use crate::ui::messages;

/// Handle the `register` command: create a new account with its contact
/// profile. No session is established; the user signs in afterwards.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        email,
        password,
        first_name,
        last_name,
        phone_number,
        preferred_name,
        membership_id,
        region,
    } = cmd
    {
        let payload = UserCreate {
            email: email.clone(),
            password: password.clone(),
            contact: Contact {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                // the contact's primary email matches the login email
                email: email.clone(),
                phone_number: phone_number.clone(),
                preferred_name: preferred_name.clone(),
                membership_id: membership_id.clone(),
                region: region.clone(),
                ..Contact::default()
            },
        };

        let api = ApiClient::new(cfg)?;
        let user = api.register(&payload)?;

        messages::success(format!("Registered {} (id {})", user.email, user.id));
        messages::info("You can now sign in with `volmgr login`");
    }

    Ok(())
}
