//! Command-line smoke entry point.
//!
//! # Responsibility
//! - Capture and paginate notes from a local entry store without a UI.
//! - Print pages left to right, entries top to bottom as the flip view shows them.

use clap::Parser;
use flipnote_core::db::open_db;
use flipnote_core::{
    default_log_level, init_logging, paginate, EntryService, LayoutParams, MonospaceMeasure, PageSet,
    SqliteEntryRepository, TimestampLabel,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Paginate saved notes into flip-view pages.
#[derive(Debug, Parser)]
#[command(name = "flipnote", version)]
struct Args {
    /// SQLite entry store; created when missing.
    db: PathBuf,

    /// Owner whose notes are listed.
    #[arg(long)]
    owner: String,

    /// Capture one note (stamped now) before paginating.
    #[arg(long)]
    add: Option<String>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 744.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Maximum notes loaded (default 200).
    #[arg(long)]
    limit: Option<u32>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level; defaults to `debug` in debug builds, `info` otherwise.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flipnote: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args
            .log_level
            .as_deref()
            .unwrap_or(default_log_level().as_str());
        init_logging(level, log_dir)?;
    }

    let layout = LayoutParams::for_viewport(args.width, args.height);
    layout.validate()?;

    let conn = open_db(&args.db)?;
    let service = EntryService::new(SqliteEntryRepository::new(&conn));
    if let Some(text) = args.add.as_deref() {
        service.capture_now(&args.owner, text)?;
    }

    let entries = service.recent(&args.owner, args.limit)?;
    let label = TimestampLabel::local();
    let pages = paginate(&entries, &MonospaceMeasure::default(), &layout, &label)?;
    info!(
        "event=cli_paginate module=cli status=ok entries={} pages={}",
        entries.len(),
        pages.len()
    );

    print_pages(&pages, &label);
    Ok(())
}

fn print_pages(pages: &PageSet, label: &TimestampLabel) {
    if pages.is_empty() {
        println!("(no notes yet)");
        return;
    }
    for (index, page) in pages.iter().enumerate() {
        println!("── page {} / {} ──", index + 1, pages.len());
        for entry in page.display_order() {
            println!("{}", label.format(entry.timestamp));
            for line in entry.text.lines() {
                println!("  {line}");
            }
        }
    }
}
