use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Handle the `profile` command: fetch and print the current user's contact
/// details. Optional fields are shown only when set.
pub fn handle(cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_authenticated()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    let contact = api.my_contact()?;

    messages::info("Your profile:");
    messages::detail("Full name", contact.full_name());
    messages::detail("Email", &contact.email);

    let optional = [
        ("Preferred name", &contact.preferred_name),
        ("Personal email", &contact.personal_email),
        ("Phone", &contact.phone_number),
        ("Secondary phone", &contact.secondary_phone_number),
        ("Gender", &contact.gender),
        ("Postal address", &contact.postal_address),
        ("Membership ID", &contact.membership_id),
        ("Unit", &contact.organizational_unit),
        ("Region", &contact.region),
        ("USI number", &contact.usi_number),
        ("Blue card", &contact.blue_card_number),
        ("License", &contact.license_number),
        ("Preferred contact", &contact.preferred_contact_method),
    ];

    for (label, value) in optional {
        if let Some(v) = value {
            messages::detail(label, v);
        }
    }

    Ok(())
}
