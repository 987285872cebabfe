// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, SnapshotSource};
use crate::render::{page, timestamp};
use crate::{fetch, file};

pub struct Params {
    pub options: AppOptions,
    pub out: Option<PathBuf>,
    pub stdout: bool,
    pub check: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            options: AppOptions::default(),
            out: None,
            stdout: false,
            check: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.check {
        return check(&params);
    }

    let inline_styles = params.options.export.inline_styles;
    let html = match fetch::load(&params.options.fetch) {
        Ok(snap) => page::render_page(&snap, inline_styles),
        Err(e) => {
            loge!("CLI: {e}");
            eprintln!("Warning: {e}; writing error page");
            page::render_error_page(inline_styles)
        }
    };

    if params.stdout {
        println!("{html}");
        return Ok(());
    }

    let mut export = params.options.export.clone();
    if let Some(out) = &params.out {
        file::apply_out_path(&mut export, out);
    }
    let path = file::write_page(&export, &html)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Fetch-only mode: print the summary the site maintainers watch for.
fn check(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let snap = fetch::load(&params.options.fetch)?;
    println!("Roster: {} wrestlers", snap.roster.len());
    println!("Schedule: {} matches", snap.schedule.len());
    println!("Results: {} completed matches", snap.results.len());
    println!(
        "Last updated: {}",
        timestamp::format_last_updated(snap.metadata.last_updated.as_deref())
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                params.options.fetch.source = SnapshotSource::LocalFile(PathBuf::from(v));
            }
            "--host" => {
                params.options.fetch.host = args.next().ok_or("Missing value for --host")?;
            }
            "--no-bust" => params.options.fetch.cache_bust = false,
            "--linked-css" => params.options.export.inline_styles = false,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--stdout" => params.stdout = true,
            "--check" => params.check = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
