use clap::{Parser, Subcommand};

/// Command-line interface definition for volmgr
/// CLI client to manage volunteers, tasks, assets, and task templates
#[derive(Parser)]
#[command(
    name = "volmgr",
    version = env!("CARGO_PKG_VERSION"),
    about = "A volunteer management CLI: tasks, assets, templates, and roles over the organisation REST API",
    long_about = None
)]
pub struct Cli {
    /// Override the API base url (useful for tests or a staging server)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Override the session token file path
    #[arg(global = true, long = "session-file")]
    pub session_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Sign in and store the session token
    Login {
        /// Account email
        email: String,

        #[arg(long, help = "Account password")]
        password: String,
    },

    /// Clear the stored session token
    Logout,

    /// Show the identity decoded from the current session
    Whoami,

    /// Register a new volunteer account
    Register {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long = "phone")]
        phone_number: Option<String>,

        #[arg(long = "preferred-name")]
        preferred_name: Option<String>,

        #[arg(long = "membership-id")]
        membership_id: Option<String>,

        #[arg(long)]
        region: Option<String>,
    },

    /// Show the current user's contact profile
    Profile,

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage assets
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage task templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Manage roles (admin)
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// List user accounts (admin)
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List your tasks
    List {
        #[arg(long, help = "List every task in the organisation (admin)")]
        all: bool,
    },

    /// Create a task
    Add {
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long = "due")]
        due_date: Option<String>,

        /// pending, in_progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,

        /// Template id providing the custom field schema
        #[arg(long)]
        template: Option<i64>,

        /// Custom field assignment NAME=VALUE; datetime fields take
        /// NAME.date=YYYY-MM-DD and NAME.time=HH:MM halves
        #[arg(long = "field")]
        fields: Vec<String>,
    },

    /// Update a task
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "due")]
        due_date: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long = "field")]
        fields: Vec<String>,
    },

    /// Delete a task by id
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum AssetAction {
    /// List assets
    List,

    /// Create an asset
    Add {
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "serial")]
        serial_number: Option<String>,

        /// Purchase date (YYYY-MM-DD)
        #[arg(long = "purchased")]
        purchase_date: Option<String>,

        /// available, assigned, maintenance, retired
        #[arg(long)]
        status: Option<String>,
    },

    /// Update an asset
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "serial")]
        serial_number: Option<String>,

        #[arg(long = "purchased")]
        purchase_date: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Delete an asset by id
    Del { id: i64 },

    /// Assign an asset to a user
    Assign {
        id: i64,

        #[arg(long = "user")]
        user_id: i64,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List templates
    List,

    /// Show a template and its field schema
    Show { id: i64 },

    /// Create a template
    Add {
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Field declaration NAME:LABEL:TYPE[:required][:opt1|opt2|...]
        #[arg(long = "field")]
        fields: Vec<String>,
    },

    /// Replace a template's name, description, and fields
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "field")]
        fields: Vec<String>,
    },

    /// Delete a template by id
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum RoleAction {
    /// List roles
    List,

    /// Assign a role to a user
    Assign {
        #[arg(long = "user")]
        user_id: i64,

        #[arg(long = "role")]
        role_id: i64,
    },

    /// Revoke a role from a user
    Revoke {
        #[arg(long = "user")]
        user_id: i64,

        #[arg(long = "role")]
        role_id: i64,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List user accounts
    List,
}
