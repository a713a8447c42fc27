use crossterm::style::Stylize;
use kv_cli::config::config::Config;
use kv_cli::data::entry::Entry;
use kv_cli::data::exporter::DataExporter;
use kv_cli::data::list::KeyValueList;
use kv_cli::data::loaders;
use kv_cli::search_filter::SearchFilter;
use kv_cli::table_display::display_list;

fn print_help() {
    println!("{}", "kv-cli - Terminal key/value listing viewer".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  kv-cli [OPTIONS] [FILE.json|FILE.csv]");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {}          - Title line shown above the listing",
        "--title <text>".green()
    );
    println!(
        "  {}                  - Show the Key/Value header row",
        "--head".green()
    );
    println!(
        "  {} - Renderer: aligned text or bordered table",
        "--format <plain|pretty>".green()
    );
    println!(
        "  {}        - Keep entries whose key matches a regex",
        "--filter <regex>".green()
    );
    println!(
        "  {}                   - List the process environment",
        "--env".green()
    );
    println!(
        "  {}         - Append an entry (repeatable)",
        "--set KEY=VALUE".green()
    );
    println!(
        "  {}     - Write CSV instead of printing",
        "--export-csv [file]".green()
    );
    println!(
        "  {}    - Write JSON instead of printing",
        "--export-json [file]".green()
    );
    println!(
        "  {}       - Write a commented default config file",
        "--generate-config".green()
    );
    println!(
        "  {}                  - Show this help",
        "--help".green()
    );
    println!();
    println!("{}", "Examples:".yellow());
    println!("  kv-cli settings.json --title \"Service Config\" --head");
    println!("  kv-cli --env --filter '^PATH' --format pretty");
    println!("  kv-cli settings.csv --export-json settings.json");
    println!();
}

/// Index of the value following a flag, if there is one and it is not
/// itself a flag
fn flag_value_index(args: &[String], flag: &str) -> Option<usize> {
    args.iter()
        .position(|arg| arg == flag)
        .map(|pos| pos + 1)
        .filter(|&idx| args.get(idx).is_some_and(|value| !value.starts_with("--")))
}

/// Value following a flag, if there is one and it is not itself a flag
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    flag_value_index(args, flag).map(|idx| args[idx].clone())
}

/// Argument indices holding flag values rather than positional arguments
fn consumed_value_indices(args: &[String]) -> Vec<usize> {
    let mut consumed = Vec::new();
    for flag in ["--title", "--filter", "--format", "--export-csv", "--export-json"] {
        consumed.extend(flag_value_index(args, flag));
    }
    for (idx, arg) in args.iter().enumerate() {
        if arg == "--set" {
            consumed.push(idx + 1);
        }
    }
    consumed
}

/// First positional `.json`/`.csv` argument whose index is not consumed as
/// a flag value. A file sharing its text with a flag value
/// (`--title config.json config.json`) is still found.
fn data_file_argument(args: &[String], consumed: &[usize]) -> Option<String> {
    args.iter()
        .enumerate()
        .skip(1)
        .filter(|(_, arg)| !arg.starts_with("--"))
        .filter(|(_, arg)| arg.ends_with(".json") || arg.ends_with(".csv"))
        .find(|(idx, _)| !consumed.contains(idx))
        .map(|(_, arg)| arg.clone())
}

fn print_status(message: &str, use_color: bool) {
    if use_color {
        println!("{}", message.green());
    } else {
        println!("{}", message);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.contains(&"--help".to_string()) {
        print_help();
        return Ok(());
    }

    // Check for config file generation
    if args.contains(&"--generate-config".to_string()) {
        let path = Config::get_config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Config::create_default_with_comments())?;
        println!("Configuration file created at: {:?}", path);
        println!("Edit this file to customize kv-cli.");
        return Ok(());
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Config error: {} (using defaults)", e).yellow()
            );
            Config::default()
        }
    };

    let title = flag_value(&args, "--title");
    let filter = flag_value(&args, "--filter");
    let format_flag = flag_value(&args, "--format");
    let export_csv = args.contains(&"--export-csv".to_string());
    let export_csv_file = flag_value(&args, "--export-csv");
    let export_json = args.contains(&"--export-json".to_string());
    let export_json_file = flag_value(&args, "--export-json");
    let use_env = args.contains(&"--env".to_string());

    let set_pairs: Vec<String> = args
        .windows(2)
        .filter(|pair| pair[0] == "--set")
        .map(|pair| pair[1].clone())
        .collect();

    let consumed = consumed_value_indices(&args);
    let data_file = data_file_argument(&args, &consumed);

    let mut list = if use_env {
        loaders::env_entries(config.behavior.sort_env)
    } else if let Some(path) = &data_file {
        if path.ends_with(".json") {
            loaders::load_json_entries(path)?
        } else {
            loaders::load_csv_entries(path, config.behavior.infer_csv_types)?
        }
    } else if !set_pairs.is_empty() {
        KeyValueList::new()
    } else {
        print_help();
        return Ok(());
    };

    for pair in &set_pairs {
        match Entry::parse(pair) {
            Some(entry) => {
                list.push(entry);
            }
            None => {
                return Err(anyhow::anyhow!(
                    "Invalid --set argument: {} (expected KEY=VALUE)",
                    pair
                ))
            }
        }
    }

    if let Some(title) = title {
        list.set_title(title);
    }
    if args.contains(&"--head".to_string()) || config.display.show_head {
        list.set_show_head(true);
    }

    if let Some(format) = format_flag {
        match format.as_str() {
            "plain" | "pretty" => config.display.format = format,
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown format: {} (expected plain or pretty)",
                    other
                ))
            }
        }
    }

    let list = match &filter {
        Some(pattern) => SearchFilter::filter_list(&list, pattern)?,
        None => list,
    };

    let mut exported = false;
    if export_csv {
        let message = match &export_csv_file {
            Some(path) => DataExporter::export_to_csv(&list, path)?,
            None => DataExporter::export_to_csv_timestamped(&list)?,
        };
        print_status(&message, config.display.use_color);
        exported = true;
    }
    if export_json {
        let message = match &export_json_file {
            Some(path) => DataExporter::export_to_json(&list, path)?,
            None => DataExporter::export_to_json_timestamped(&list)?,
        };
        print_status(&message, config.display.use_color);
        exported = true;
    }

    if !exported {
        display_list(&list, &config);
    }

    Ok(())
}

fn main() {
    kv_cli::logging::init_tracing();

    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
