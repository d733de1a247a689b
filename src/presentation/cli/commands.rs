use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use super::error::CliError;
use crate::{
    application::{
        ports::{ClockPort, SlugGeneratorPort},
        queries::tasks::{GetTaskLinkQuery, ResolveTaskSlugQuery},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        slug::{extract_id_from_slug, generate_slug, generate_unique_slug},
        task::TaskReadRepository,
    },
    infrastructure::{
        repositories::InMemoryTaskRepository,
        time::{FixedClock, SystemClock},
        util::DefaultSlugGenerator,
    },
};

#[derive(Debug, Parser)]
#[command(name = "casa-check")]
#[command(about = "Share-link slugs for Casa Check tasks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize text into a slug base.
    Slug { text: String },
    /// Build a share slug from a title and a record id.
    Link {
        text: String,
        #[arg(long)]
        id: String,
    },
    /// Print the id or id prefix carried by a slug.
    Extract { slug: String },
    /// Look up the task a slug points to.
    Resolve {
        slug: String,
        #[command(flatten)]
        source: TaskSource,
    },
    /// Print the share link of a task.
    Share {
        id: String,
        #[command(flatten)]
        source: TaskSource,
    },
    /// List every task with its slug.
    List {
        #[command(flatten)]
        source: TaskSource,
    },
    /// List task categories with their labels and icons.
    Categories,
}

#[derive(Debug, Args)]
pub struct TaskSource {
    /// Task export to read; defaults to CASA_TASKS_FILE.
    #[arg(short, long)]
    pub tasks: Option<PathBuf>,
    /// Evaluate due dates as of this day instead of today.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Runs one command and returns what should go to stdout.
pub async fn execute(command: Commands, config: &AppConfig) -> Result<String, CliError> {
    match command {
        Commands::Slug { text } => Ok(generate_slug(&text)),
        Commands::Link { text, id } => Ok(generate_unique_slug(&text, &id)),
        Commands::Extract { slug } => extract_id_from_slug(&slug)
            .map(str::to_owned)
            .ok_or_else(|| CliError::new(CliError::NO_MATCH, "no identifier found")),
        Commands::Resolve { slug, source } => {
            let services = load_services(&source, config).await?;
            let task = services
                .task_queries
                .resolve_slug(ResolveTaskSlugQuery { slug })
                .await?;
            to_json(&task)
        }
        Commands::Share { id, source } => {
            let services = load_services(&source, config).await?;
            let link = services
                .task_queries
                .share_link(GetTaskLinkQuery { id })
                .await?;
            to_json(&link)
        }
        Commands::List { source } => {
            let services = load_services(&source, config).await?;
            let tasks = services.task_queries.list_tasks().await?;
            to_json(&tasks)
        }
        Commands::Categories => {
            let repo: Arc<dyn TaskReadRepository> = Arc::new(InMemoryTaskRepository::default());
            let services = build_services(repo, Arc::new(SystemClock), config);
            to_json(&services.categories())
        }
    }
}

async fn load_services(
    source: &TaskSource,
    config: &AppConfig,
) -> Result<ApplicationServices, CliError> {
    let path = source.tasks.as_ref().unwrap_or_else(|| config.tasks_file());
    let repo: Arc<dyn TaskReadRepository> = Arc::new(InMemoryTaskRepository::load_json(path).await?);

    let clock: Arc<ClockPort> = match source.as_of {
        Some(day) => Arc::new(FixedClock::start_of(day)),
        None => Arc::new(SystemClock),
    };

    Ok(build_services(repo, clock, config))
}

fn build_services(
    repo: Arc<dyn TaskReadRepository>,
    clock: Arc<ClockPort>,
    config: &AppConfig,
) -> ApplicationServices {
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(repo, clock, slugger, config.link_base_path())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
