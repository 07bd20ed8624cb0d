use crate::api::ApiClient;
use crate::cli::parser::TaskAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::forms::FormState;
use crate::models::task::{TaskCreate, TaskStatus, TaskUpdate};
use crate::session::Session;
use crate::ui::messages;
use crate::utils::date::parse_date;
use crate::utils::formatting::{describe_status, opt_str, truncate};
use crate::utils::table::{Column, Table};

/// Handle the `task` subcommands
pub fn handle(action: &TaskAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let token = session.require_authenticated()?;
    let api = ApiClient::new(cfg)?.with_token(token);

    match action {
        TaskAction::List { all } => {
            let tasks = if *all {
                session.require_admin()?;
                api.list_all_tasks()?
            } else {
                api.list_tasks()?
            };

            let mut table = Table::new(vec![
                Column::new("ID", 6),
                Column::new("TITLE", 32),
                Column::new("STATUS", 12),
                Column::new("DUE", 12),
                Column::new("TEMPLATE", 8),
            ]);

            for t in &tasks {
                let (status_label, _) = describe_status(t.status.as_str());
                table.add_row(vec![
                    t.id.to_string(),
                    truncate(&t.title, 32),
                    status_label,
                    truncate(&opt_str(&t.due_date), 12),
                    t.template_id.map(|id| id.to_string()).unwrap_or_default(),
                ]);
            }

            print!("{}", table.render());
            println!("{} task(s)", tasks.len());
        }

        TaskAction::Add {
            title,
            description,
            due_date,
            status,
            template,
            fields,
        } => {
            let status = parse_status(status.as_deref())?.unwrap_or(TaskStatus::Pending);
            let due_date = parse_due(due_date.as_deref())?;

            let custom_data = match template {
                Some(template_id) => {
                    let tpl = api.get_template(*template_id)?;
                    let mut form = FormState::new(tpl.fields_schema.clone());
                    for spec in fields {
                        form.apply_assignment(spec)?;
                    }
                    form.validate()?;
                    Some(form.to_custom_data())
                }
                None => {
                    if !fields.is_empty() {
                        return Err(AppError::Validation(
                            "--field requires --template".to_string(),
                        ));
                    }
                    None
                }
            };

            let created = api.create_task(&TaskCreate {
                title: title.clone(),
                description: description.clone(),
                due_date,
                status,
                template_id: *template,
                custom_data,
            })?;

            messages::success(format!("Created task {} ({})", created.id, created.title));
        }

        TaskAction::Edit {
            id,
            title,
            description,
            due_date,
            status,
            fields,
        } => {
            let mut update = TaskUpdate {
                title: title.clone(),
                description: description.clone(),
                due_date: parse_due(due_date.as_deref())?,
                status: parse_status(status.as_deref())?,
                custom_data: None,
            };

            if !fields.is_empty() {
                let task = api.get_task(*id)?;
                let template_id = task.template_id.ok_or_else(|| {
                    AppError::Validation(format!("task {} has no template", id))
                })?;
                let tpl = api.get_template(template_id)?;

                let mut form = FormState::from_wire(&tpl, task.custom_data.as_ref());
                for spec in fields {
                    form.apply_assignment(spec)?;
                }
                form.validate()?;
                update.custom_data = Some(form.to_custom_data());
            }

            let updated = api.update_task(*id, &update)?;
            messages::success(format!("Updated task {} ({})", updated.id, updated.title));
        }

        TaskAction::Del { id } => {
            api.delete_task(*id)?;
            messages::success(format!("Deleted task {}", id));
        }
    }

    Ok(())
}

fn parse_status(s: Option<&str>) -> AppResult<Option<TaskStatus>> {
    match s {
        Some(code) => TaskStatus::from_code(code)
            .map(Some)
            .ok_or_else(|| AppError::InvalidStatus(code.to_string())),
        None => Ok(None),
    }
}

fn parse_due(s: Option<&str>) -> AppResult<Option<String>> {
    match s {
        Some(raw) => {
            let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            Ok(Some(d.format("%Y-%m-%d").to_string()))
        }
        None => Ok(None),
    }
}
