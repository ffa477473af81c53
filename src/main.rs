use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

use ccs::decode::{FsOracle, resolve_encoded};
use ccs::output;
use ccs::projects::{self, Project};
use ccs::utils::app_data::{AppConfig, SortOrder};

#[derive(Parser)]
#[command(name = "ccs")]
#[command(about = "Terminal-first project switcher for Claude Code", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search pattern (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    pattern: Vec<String>,

    /// Override the Claude Code projects directory
    #[arg(long, global = true, value_name = "DIR")]
    projects_dir: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value = "auto")]
    color: ColorArg,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known projects
    List {
        /// Listing order
        #[arg(short, long, value_enum)]
        sort: Option<SortOrder>,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Fuzzy-search projects and print them ranked
    Search {
        /// Search pattern
        pattern: Vec<String>,

        /// Keep only the top N results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Print the path of the best-matching project (for `cd "$(ccs jump api)"`)
    Jump {
        /// Search pattern
        pattern: Vec<String>,
    },
    /// Decode an encoded project directory name against the filesystem
    Resolve {
        /// Encoded name, e.g. "c--work-root-project"
        token: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let color: ColorChoice = cli.color.into();
    let override_dir = cli.projects_dir.as_deref();

    match cli.command {
        Some(Commands::List { sort, json }) => {
            let sort = sort.unwrap_or(config.sort);
            let projects = load_projects(&config, override_dir, sort)?;
            let refs: Vec<&Project> = projects.iter().collect();
            if json {
                output::print_projects_json(&refs)?;
            } else {
                output::print_project_list(&refs, color)?;
            }
        }
        Some(Commands::Search {
            pattern,
            limit,
            json,
        }) => {
            run_search(&config, override_dir, &pattern.join(" "), limit, json, color)?;
        }
        Some(Commands::Jump { pattern }) => {
            run_jump(&config, override_dir, &pattern.join(" "))?;
        }
        Some(Commands::Resolve { token }) => {
            let path = resolve_encoded(&token, &FsOracle);
            if path.is_empty() {
                bail!("nothing to decode in {token:?}");
            }
            println!("{path}");
        }
        None => {
            if cli.pattern.is_empty() {
                let projects = load_projects(&config, override_dir, config.sort)?;
                let refs: Vec<&Project> = projects.iter().collect();
                output::print_project_list(&refs, color)?;
            } else {
                run_search(&config, override_dir, &cli.pattern.join(" "), None, false, color)?;
            }
        }
    }

    Ok(())
}

/// Discover, filter, and order projects according to config and flags.
fn load_projects(
    config: &AppConfig,
    override_dir: Option<&Path>,
    sort: SortOrder,
) -> Result<Vec<Project>> {
    let dir = config.resolve_projects_dir(override_dir)?;
    log::debug!("scanning {}", dir.display());

    let mut projects = projects::load_projects(&dir)?;
    if !config.show_missing {
        projects.retain(|project| !project.missing);
    }

    match sort {
        // Discovery already returns most-recent-first.
        SortOrder::Recent => {}
        SortOrder::Name => projects::sort_by_name(&mut projects),
    }

    Ok(projects)
}

fn run_search(
    config: &AppConfig,
    override_dir: Option<&Path>,
    pattern: &str,
    limit: Option<usize>,
    json: bool,
    color: ColorChoice,
) -> Result<()> {
    let projects = load_projects(config, override_dir, SortOrder::Recent)?;
    let mut results = projects::search_projects(pattern, &projects);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        output::print_search_results_json(&results)?;
    } else {
        output::print_search_results(&results, color)?;
    }

    Ok(())
}

fn run_jump(config: &AppConfig, override_dir: Option<&Path>, pattern: &str) -> Result<()> {
    let projects = load_projects(config, override_dir, SortOrder::Recent)?;
    let results = projects::search_projects(pattern, &projects);

    match results.first() {
        Some((project, _)) => {
            println!("{}", project.path.display());
            Ok(())
        }
        None => bail!("no project matches {pattern:?}"),
    }
}
