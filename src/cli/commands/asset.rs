use crate::api::ApiClient;
use crate::cli::parser::AssetAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::asset::{AssetCreate, AssetStatus, AssetUpdate};
use crate::session::Session;
use crate::ui::messages;
use crate::utils::date::parse_date;
use crate::utils::formatting::{opt_str, truncate};
use crate::utils::table::{Column, Table};

/// Handle the `asset` subcommands
pub fn handle(action: &AssetAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_authenticated()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    match action {
        AssetAction::List => {
            let assets = api.list_assets()?;

            let mut table = Table::new(vec![
                Column::new("ID", 6),
                Column::new("NAME", 28),
                Column::new("SERIAL", 16),
                Column::new("STATUS", 12),
                Column::new("ASSIGNEE", 8),
            ]);

            for a in &assets {
                table.add_row(vec![
                    a.id.to_string(),
                    truncate(&a.name, 28),
                    truncate(&opt_str(&a.serial_number), 16),
                    a.status.as_str().to_string(),
                    a.assignee_id.map(|id| id.to_string()).unwrap_or_default(),
                ]);
            }

            print!("{}", table.render());
            println!("{} asset(s)", assets.len());
        }

        AssetAction::Add {
            name,
            description,
            serial_number,
            purchase_date,
            status,
        } => {
            let created = api.create_asset(&AssetCreate {
                name: name.clone(),
                description: description.clone(),
                serial_number: serial_number.clone(),
                purchase_date: parse_purchase(purchase_date.as_deref())?,
                status: parse_status(status.as_deref())?.unwrap_or(AssetStatus::Available),
            })?;

            messages::success(format!("Created asset {} ({})", created.id, created.name));
        }

        AssetAction::Edit {
            id,
            name,
            description,
            serial_number,
            purchase_date,
            status,
        } => {
            let updated = api.update_asset(
                *id,
                &AssetUpdate {
                    name: name.clone(),
                    description: description.clone(),
                    serial_number: serial_number.clone(),
                    purchase_date: parse_purchase(purchase_date.as_deref())?,
                    status: parse_status(status.as_deref())?,
                    assignee_id: None,
                },
            )?;

            messages::success(format!("Updated asset {} ({})", updated.id, updated.name));
        }

        AssetAction::Del { id } => {
            api.delete_asset(*id)?;
            messages::success(format!("Deleted asset {}", id));
        }

        AssetAction::Assign { id, user_id } => {
            let asset = api.assign_asset(*id, *user_id)?;
            messages::success(format!(
                "Assigned asset {} ({}) to user {}",
                asset.id, asset.name, user_id
            ));
        }
    }

    Ok(())
}

fn parse_status(s: Option<&str>) -> AppResult<Option<AssetStatus>> {
    match s {
        Some(code) => AssetStatus::from_code(code)
            .map(Some)
            .ok_or_else(|| AppError::InvalidStatus(code.to_string())),
        None => Ok(None),
    }
}

fn parse_purchase(s: Option<&str>) -> AppResult<Option<String>> {
    match s {
        Some(raw) => {
            let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            Ok(Some(d.format("%Y-%m-%d").to_string()))
        }
        None => Ok(None),
    }
}
