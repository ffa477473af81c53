//! Output formatting for project listings and search results

use crate::projects::Project;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print projects as an aligned table: name, last-used age, path.
pub fn print_project_list(projects: &[&Project], color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    let now = Utc::now();
    let name_width = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    for project in projects {
        print_project_line(&mut stdout, project, None, name_width, now)?;
    }

    Ok(())
}

/// Print ranked search results with their scores.
pub fn print_search_results(results: &[(&Project, u32)], color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    let now = Utc::now();
    let name_width = results
        .iter()
        .map(|(p, _)| p.name.chars().count())
        .max()
        .unwrap_or(0);

    for (project, score) in results {
        print_project_line(&mut stdout, project, Some(*score), name_width, now)?;
    }

    Ok(())
}

fn print_project_line(
    stdout: &mut StandardStream,
    project: &Project,
    score: Option<u32>,
    name_width: usize,
    now: DateTime<Utc>,
) -> io::Result<()> {
    if let Some(score) = score {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stdout, "{score:>5}  ")?;
        stdout.reset()?;
    }

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write!(stdout, "{:<name_width$}", project.name)?;
    stdout.reset()?;

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "  {:>7}", relative_age(project.last_used, now))?;
    stdout.reset()?;

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stdout, "  {}", project.path.display())?;
    stdout.reset()?;

    if project.missing {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(stdout, "  (missing)")?;
        stdout.reset()?;
    }

    writeln!(stdout)
}

/// Print projects as a JSON array for scripting.
pub fn print_projects_json(projects: &[&Project]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &projects)?;
    writeln!(handle)
}

#[derive(Serialize)]
struct ScoredProject<'a> {
    score: u32,
    #[serde(flatten)]
    project: &'a Project,
}

/// Print ranked search results as a JSON array, scores included.
pub fn print_search_results_json(results: &[(&Project, u32)]) -> io::Result<()> {
    let scored: Vec<ScoredProject> = results
        .iter()
        .map(|(project, score)| ScoredProject {
            score: *score,
            project,
        })
        .collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &scored)?;
    writeln!(handle)
}

/// Compact "how long ago" label, or "-" when unknown.
fn relative_age(last_used: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(stamp) = last_used else {
        return "-".to_string();
    };

    let secs = (now - stamp).num_seconds().max(0);
    match secs {
        s if s < 60 => "now".to_string(),
        s if s < 3600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3600),
        s if s < 86_400 * 30 => format!("{}d ago", s / 86_400),
        s if s < 86_400 * 365 => format!("{}mo ago", s / (86_400 * 30)),
        s => format!("{}y ago", s / (86_400 * 365)),
    }
}
