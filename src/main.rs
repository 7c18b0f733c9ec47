//! bandpage – command-line banded-list layout runner.
//!
//! Usage:
//!   bandpage <format.json> <data.json> [output.json] [--title "My Report"] [--compact]
//!
//! If `output.json` is omitted the layout is written next to the data file
//! with the same stem and a `.layout.json` extension (e.g. `items.json` →
//! `items.layout.json`).

use std::{env, fs, path::PathBuf, process};

use bandpage::events::NullSink;
use bandpage::format::ListFormat;
use bandpage::pipeline::{build_document, ListData, RunConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut format_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut compact = false;
    let mut title: Option<String> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--compact" | "-c" => compact = true,
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("--title requires a value");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    format_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    data_path = Some(PathBuf::from(path));
                } else if positional == 2 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let (format_path, data_path) = match (format_path, data_path) {
        (Some(f), Some(d)) => (f, d),
        _ => {
            eprintln!("Error: a format file and a data file are required.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Default output: same directory + same stem as the data file.
    let output = output_path.unwrap_or_else(|| {
        let mut o = data_path.clone();
        o.set_extension("layout.json");
        o
    });

    let format = match fs::read_to_string(&format_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", format_path.display());
            process::exit(1);
        }
    };
    let format = match ListFormat::from_json(&format) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error in '{}': {e}", format_path.display());
            process::exit(1);
        }
    };

    let data = match fs::read_to_string(&data_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", data_path.display());
            process::exit(1);
        }
    };
    let data = match ListData::from_json(&data) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error in '{}': {e}", data_path.display());
            process::exit(1);
        }
    };

    // Default title: stem of the data filename.
    let default_title = data_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bandpage output")
        .to_string();

    let config = RunConfig {
        title: title.unwrap_or(default_title),
    };

    match build_document(&format, &data, &config, &mut NullSink) {
        Ok(layout) => {
            let json = if compact {
                serde_json::to_string(&layout).unwrap_or_default()
            } else {
                layout.to_json()
            };
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("Error creating output directory: {e}");
                        process::exit(1);
                    }
                }
            }
            if let Err(e) = fs::write(&output, &json) {
                eprintln!("Error writing '{}': {e}", output.display());
                process::exit(1);
            }
            let pages = layout.pages.len();
            eprintln!(
                "Wrote '{}' ({} page{}, {} rows)",
                output.display(),
                pages,
                if pages == 1 { "" } else { "s" },
                layout.row_count()
            );
        }
        Err(e) => {
            eprintln!("Error building layout: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("bandpage – banded-list layout runner");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <format.json> <data.json> [output.json] [--title \"My Report\"] [--compact]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <format.json>  List format: section heights, fields, page-break policy");
    eprintln!("  <data.json>    Header values and detail records to place");
    eprintln!("  [output.json]  Output path  (default: data file stem with .layout.json)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --title, -t    Document title in the exported layout (default: data filename stem)");
    eprintln!("  --compact, -c  Emit compact JSON instead of pretty-printed");
    eprintln!("  --help         Print this message");
}
