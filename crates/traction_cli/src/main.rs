//! CLI smoke entry point and snapshot renderer.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `traction_core` linkage.
//! - Render a deterministic text overview from a cached snapshot file for
//!   quick local sanity checks without the UI shell.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use traction_core::model::dates::parse_date_like;
use traction_core::{load_snapshot_file, DashboardService, Pacing, ProjectCard};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let mut snapshot_path: Option<String> = None;
    let mut today: Option<NaiveDate> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--today" => {
                let Some(value) = args.next().as_deref().and_then(parse_date_like) else {
                    eprintln!("--today expects a YYYY-MM-DD date");
                    return ExitCode::FAILURE;
                };
                today = Some(value);
            }
            "--help" | "-h" => {
                println!("usage: traction_cli [SNAPSHOT_JSON_PATH] [--today YYYY-MM-DD]");
                return ExitCode::SUCCESS;
            }
            path if snapshot_path.is_none() => snapshot_path = Some(path.to_string()),
            unexpected => {
                eprintln!("unexpected argument: {unexpected}");
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(path) = snapshot_path else {
        // No snapshot given: stay a tiny probe that validates core wiring.
        println!("traction_core ping={}", traction_core::ping());
        println!("traction_core version={}", traction_core::core_version());
        return ExitCode::SUCCESS;
    };

    let snapshot = match load_snapshot_file(&path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let cards = DashboardService::new(snapshot).project_cards(today);
    if cards.is_empty() {
        println!("no projects in snapshot");
        return ExitCode::SUCCESS;
    }

    println!("overview for {today} ({} projects)", cards.len());
    for card in &cards {
        println!("{}", render_card(card));
    }
    ExitCode::SUCCESS
}

/// One fixed-shape line per project so output diffs stay readable.
fn render_card(card: &ProjectCard) -> String {
    let progress = format!("{:>3}% ({}/{})", card.progress.percent, card.progress.completed, card.progress.total);
    let pacing = match card.pacing {
        Some(Pacing::Behind) => "behind",
        Some(Pacing::OnTrack) => "on-track",
        Some(Pacing::ToMonitor) => "to-monitor",
        None => "-",
    };
    let deadline = card
        .deadline
        .as_ref()
        .map(|deadline| deadline.label.clone())
        .unwrap_or_else(|| "no deadline".to_string());
    format!("  {:<28} {} pacing={pacing} due: {deadline}", card.title, progress)
}
