//! Nagar Control - console client for the municipal complaint system.
//!
//! Every subcommand is one page of the admin console: it resolves the
//! session, scopes the working set through nagar_core, and renders.

mod commands;
mod session_store;
mod store;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nagar_core::complaint::{Category, Priority, Status};
use nagar_core::department::Department;
use nagar_core::session::Role;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "nagarctl")]
#[command(about = "Nagar Console - municipal complaint management", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Complaint data file (JSON). Uses built-in sample data when omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Session file override (defaults to the user config dir).
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a role (replaces any existing session)
    Login {
        /// Display name
        #[arg(long)]
        name: String,

        /// Role: SUPER_ADMIN, DEPT_ADMIN, WARD_OFFICER or FIELD_STAFF
        #[arg(long)]
        role: Role,

        /// Department for DEPT_ADMIN (e.g. "Public Works")
        #[arg(long)]
        department: Option<Department>,

        /// Ward for WARD_OFFICER (e.g. W-12)
        #[arg(long)]
        ward: Option<String>,

        /// Log in as a roster staff member by id (for FIELD_STAFF scope)
        #[arg(long)]
        id: Option<String>,
    },

    /// Log out and clear the session
    Logout,

    /// Show the current session
    Whoami,

    /// Operations overview for your scope
    Dashboard,

    /// Filtered complaint feed
    Feed {
        /// Free-text search over title and description
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<Category>,

        /// Filter by status
        #[arg(long)]
        status: Option<Status>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<Priority>,

        /// Only complaints past their SLA window
        #[arg(long)]
        overdue: bool,
    },

    /// Staff performance leaderboard
    Staff,

    /// Bulk-assign complaints
    Assign {
        /// Complaint ids, comma separated
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,

        /// Route each complaint to the nearest staff in its department
        #[arg(long)]
        nearest: bool,

        /// Assign everything to this staff id instead
        #[arg(long)]
        staff: Option<String>,
    },

    /// Set a complaint's status
    Update {
        /// Complaint id
        #[arg(long)]
        id: String,

        /// New status (NEW, ACCEPTED, ASSIGNED, IN_PROGRESS, RESOLVED)
        #[arg(long)]
        status: Status,
    },

    /// Category routing table with SLA windows
    Route {
        /// Show a single category
        category: Option<Category>,
    },

    /// Normalized map positions for your scope
    Map,

    /// Department, category and daily breakdowns
    Reports,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let data = cli.data.as_deref();
    let session = cli
        .session
        .clone()
        .unwrap_or_else(session_store::default_session_path);

    match cli.command {
        Commands::Login {
            name,
            role,
            department,
            ward,
            id,
        } => commands::login(&session, &name, role, department, ward, id),
        Commands::Logout => commands::logout(&session),
        Commands::Whoami => commands::whoami(&session),
        Commands::Dashboard => commands::dashboard(data, &session),
        Commands::Feed {
            query,
            category,
            status,
            priority,
            overdue,
        } => commands::feed(data, &session, query, category, status, priority, overdue),
        Commands::Staff => commands::staff(data, &session),
        Commands::Assign { ids, nearest, staff } => {
            commands::assign(data, &session, ids, nearest, staff)
        }
        Commands::Update { id, status } => commands::update(data, &session, id, status),
        Commands::Route { category } => commands::route(category),
        Commands::Map => commands::map(data, &session),
        Commands::Reports => commands::reports(data, &session),
    }
}
