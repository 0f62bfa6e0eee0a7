//! CLI tool for tableview - derives a table view from a JSON data file
//!
//! Usage:
//!   tableview_cli <data.json>                          # View state as JSON
//!   tableview_cli <data.json> --sort price --desc      # Sorted descending
//!   tableview_cli <data.json> --filter name=_ab        # Text filter on a column
//!   tableview_cli <data.json> --hide notes --order b,a # Column visibility/order
//!   tableview_cli <data.json> --format tsv             # Plain text table
//!
//! The data file is `{ "headers": [...], "items": [...], "options": {...} }`.
//! Set `RUST_LOG=tableview=debug` for pipeline logging on stderr.

#![allow(clippy::exit)]

use serde::Deserialize;
use std::env;
use std::fs;
use std::io::{self, Write};
use tableview::{Header, Item, KeyValueStore, MemoryStore, TableOptions, TableViewModel};
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct DataFile {
    headers: Vec<Header>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    options: TableOptions,
}

#[derive(Default)]
struct Args {
    input: String,
    sort: Option<String>,
    descending: bool,
    filters: Vec<(String, String)>,
    hidden: Vec<String>,
    order: Vec<String>,
    tsv: bool,
}

fn usage() -> ! {
    eprintln!(
        "Usage: tableview_cli <data.json> [--sort ID] [--desc] [--filter ID=TERM]... \
         [--hide ID]... [--order ID,ID,...] [--format json|tsv]"
    );
    std::process::exit(1);
}

fn value(flag: &str, next: Option<String>) -> Result<String, String> {
    next.ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sort" => args.sort = Some(value("--sort", iter.next())?),
            "--desc" => args.descending = true,
            "--filter" => {
                let spec = value("--filter", iter.next())?;
                let Some((id, term)) = spec.split_once('=') else {
                    return Err(format!("--filter expects ID=TERM, got {spec}"));
                };
                args.filters.push((id.to_string(), term.to_string()));
            }
            "--hide" => args.hidden.push(value("--hide", iter.next())?),
            "--order" => {
                let ids = value("--order", iter.next())?;
                args.order = ids.split(',').map(str::to_string).collect();
            }
            "--format" => match iter.next().as_deref() {
                Some("tsv") => args.tsv = true,
                Some("json") => args.tsv = false,
                _ => return Err("--format expects json or tsv".to_string()),
            },
            _ if args.input.is_empty() && !arg.starts_with("--") => args.input = arg,
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }

    if args.input.is_empty() {
        return Err("missing data file".to_string());
    }
    if args.descending && args.sort.is_none() {
        return Err("--desc requires --sort".to_string());
    }
    Ok(args)
}

/// Every column named by `--sort`, `--filter` or `--hide` must exist.
fn check_columns<S: KeyValueStore>(
    table: &TableViewModel<S>,
    args: &Args,
) -> tableview::Result<()> {
    let named = args
        .sort
        .iter()
        .chain(args.filters.iter().map(|(id, _)| id))
        .chain(args.hidden.iter());
    for id in named {
        table.header(id)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            usage();
        }
    };

    let raw = match fs::read_to_string(&args.input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let mut data: DataFile = match serde_json::from_str(&raw) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    if !args.filters.is_empty() {
        data.options.text_filter = true;
    }

    let mut table = match TableViewModel::new(data.options, MemoryStore::new())
        .with_data(data.headers, data.items)
    {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Invalid table data: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = check_columns(&table, &args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if !args.hidden.is_empty() {
        let selected: Vec<String> = table
            .headers()
            .iter()
            .filter(|h| !args.hidden.contains(&h.id))
            .map(|h| h.id.clone())
            .collect();
        table.select_columns(&selected);
    }
    if !args.order.is_empty() {
        table.reorder_headers(&args.order);
    }
    for (id, term) in &args.filters {
        if !table.set_text_filter(id, term) {
            eprintln!("Warning: column {id} has no text filter");
        }
    }
    if let Some(column) = &args.sort {
        table.sort_column(column);
        if args.descending {
            table.sort_column(column);
        }
    }

    let view = table.view_state();
    let output = if args.tsv {
        view.to_tsv()
    } else {
        match serde_json::to_string_pretty(&view) {
            Ok(j) => j + "\n",
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
