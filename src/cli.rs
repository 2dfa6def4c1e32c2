// src/cli.rs
use std::{env, error::Error};

use crate::check::{self, CheckOutcome, SortDirection};
use crate::config::options::{CheckOptions, SelectorSpec};
use crate::driver::HttpDriver;
use crate::progress::{NullProgress, Progress};

pub fn run() -> Result<CheckOutcome, Box<dyn Error>> {
    let opts = parse_cli(env::args().skip(1))?;
    let driver = HttpDriver::new(opts.selectors.clone());

    let mut stderr = StderrProgress::default();
    let mut null = NullProgress;
    let progress: &mut dyn Progress = if opts.quiet { &mut null } else { &mut stderr };

    let outcome = check::check(driver, &opts.source, opts.count, opts.direction, Some(progress));

    match &outcome {
        CheckOutcome::Sorted => {
            println!("OK: first {} items are in {} order", opts.count, opts.direction.label());
        }
        other => println!("FAIL: {other}"),
    }
    Ok(outcome)
}

pub fn parse_cli(mut args: impl Iterator<Item = String>) -> Result<CheckOptions, Box<dyn Error>> {
    let mut source: Option<String> = None;
    let mut count: Option<usize> = None;
    let mut direction = SortDirection::Descending;
    let mut selectors = SelectorSpec::default();
    let mut quiet = false;

    while let Some(a) = args.next() {
        // Bare token: the positional source URL
        if !a.starts_with('-') && source.is_none() {
            source = Some(a);
            continue;
        }
        match a.as_str()
        {
            "-u" | "--url" => source = Some(args.next().ok_or("Missing value for --url")?),
            "-n" | "--count" => {
                let v = args.next().ok_or("Missing value for --count")?;
                count = Some(v.parse().map_err(|_| format!("Invalid count: {}", v))?);
            }
            "--ascending" | "--asc" => direction = SortDirection::Ascending,
            "--descending" | "--desc" => direction = SortDirection::Descending,
            "--timestamp-class" => {
                selectors.timestamp_class = args.next().ok_or("Missing value for --timestamp-class")?;
            }
            "--timestamp-attr" => {
                selectors.timestamp_attr = args.next().ok_or("Missing value for --timestamp-attr")?;
            }
            "--more-class" => {
                selectors.more_link_class = args.next().ok_or("Missing value for --more-class")?;
            }
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let mut opts = CheckOptions::new(source.ok_or("Missing source URL (positional or --url)")?);
    if let Some(n) = count { opts.count = n; }
    opts.direction = direction;
    opts.selectors = selectors;
    opts.quiet = quiet;
    Ok(opts)
}

/// Progress narration on stderr; the verdict line goes to stdout.
#[derive(Default)]
pub struct StderrProgress {
    target: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, target: usize) {
        self.target = target;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: usize, collected: usize) {
        eprintln!("Collecting timestamps… page {page}, {collected}/{} so far", self.target);
    }
}
