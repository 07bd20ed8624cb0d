use crate::api::ApiClient;
use crate::cli::parser::TemplateAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::template::{FieldKind, FieldSchema, TemplatePayload};
use crate::session::Session;
use crate::ui::messages;
use crate::utils::formatting::{opt_str, truncate};
use crate::utils::table::{Column, Table};

/// Handle the `template` subcommands
pub fn handle(action: &TemplateAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_authenticated()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    match action {
        TemplateAction::List => {
            let templates = api.list_templates()?;

            let mut table = Table::new(vec![
                Column::new("ID", 6),
                Column::new("NAME", 28),
                Column::new("FIELDS", 8),
                Column::new("DESCRIPTION", 36),
            ]);

            for t in &templates {
                table.add_row(vec![
                    t.id.to_string(),
                    truncate(&t.name, 28),
                    t.fields_schema.len().to_string(),
                    truncate(&opt_str(&t.description), 36),
                ]);
            }

            print!("{}", table.render());
            println!("{} template(s)", templates.len());
        }

        TemplateAction::Show { id } => {
            let tpl = api.get_template(*id)?;

            messages::info(format!("Template {} ({})", tpl.id, tpl.name));
            if let Some(desc) = &tpl.description {
                messages::detail("Description", desc);
            }

            let mut table = Table::new(vec![
                Column::new("NAME", 20),
                Column::new("LABEL", 24),
                Column::new("TYPE", 10),
                Column::new("REQ", 4),
                Column::new("OPTIONS", 30),
            ]);

            for f in &tpl.fields_schema {
                table.add_row(vec![
                    f.name.clone(),
                    f.label.clone(),
                    f.kind.as_str().to_string(),
                    if f.required { "yes" } else { "" }.to_string(),
                    f.options
                        .as_ref()
                        .map(|o| o.join("|"))
                        .unwrap_or_default(),
                ]);
            }

            print!("{}", table.render());
        }

        TemplateAction::Add {
            name,
            description,
            fields,
        } => {
            let fields_schema = fields
                .iter()
                .map(|s| parse_field_spec(s))
                .collect::<AppResult<Vec<_>>>()?;

            let created = api.create_template(&TemplatePayload {
                name: name.clone(),
                description: description.clone(),
                fields_schema,
            })?;

            messages::success(format!(
                "Created template {} ({}) with {} field(s)",
                created.id,
                created.name,
                created.fields_schema.len()
            ));
        }

        TemplateAction::Edit {
            id,
            name,
            description,
            fields,
        } => {
            // load the current definition so unset parts are preserved
            let current = api.get_template(*id)?;

            let fields_schema = if fields.is_empty() {
                current.fields_schema
            } else {
                fields
                    .iter()
                    .map(|s| parse_field_spec(s))
                    .collect::<AppResult<Vec<_>>>()?
            };

            let updated = api.update_template(
                *id,
                &TemplatePayload {
                    name: name.clone().unwrap_or(current.name),
                    description: description.clone().or(current.description),
                    fields_schema,
                },
            )?;

            messages::success(format!("Updated template {} ({})", updated.id, updated.name));
        }

        TemplateAction::Del { id } => {
            api.delete_template(*id)?;
            messages::success(format!("Deleted template {}", id));
        }
    }

    Ok(())
}

/// Parse one `--field` declaration of the form
/// `NAME:LABEL:TYPE[:required][:opt1|opt2|...]`.
///
/// The option list is only meaningful (and then mandatory, non-empty) for
/// `select` fields.
pub fn parse_field_spec(spec: &str) -> AppResult<FieldSchema> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 3 {
        return Err(AppError::InvalidFieldSpec(format!(
            "'{}' (expected NAME:LABEL:TYPE[:required][:opt1|opt2|...])",
            spec
        )));
    }

    let name = parts[0].trim();
    let label = parts[1].trim();
    if name.is_empty() || label.is_empty() {
        return Err(AppError::InvalidFieldSpec(format!(
            "'{}' (empty name or label)",
            spec
        )));
    }

    let kind = FieldKind::from_code(parts[2].trim());
    if !kind.is_known() {
        return Err(AppError::InvalidFieldSpec(format!(
            "unknown field type '{}'",
            parts[2]
        )));
    }

    let mut required = false;
    let mut options: Option<Vec<String>> = None;

    for extra in &parts[3..] {
        match extra.trim() {
            "required" => required = true,
            "optional" => required = false,
            other if !other.is_empty() => {
                let opts: Vec<String> = other
                    .split('|')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect();
                options = Some(opts);
            }
            _ => {}
        }
    }

    if kind == FieldKind::Select {
        match &options {
            Some(opts) if !opts.is_empty() => {}
            _ => {
                return Err(AppError::InvalidFieldSpec(format!(
                    "select field '{}' needs a non-empty option list",
                    name
                )))
            }
        }
    } else {
        options = None;
    }

    Ok(FieldSchema {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        required,
        options,
    })
}
