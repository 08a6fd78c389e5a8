use clap::{Arg, Command};
use linkscan::domain_age::{FixedDomainAge, SimulatedDomainAge};
use linkscan::report::{self, BatchSummary, ScanEntry};
use linkscan::{AnalyzerConfig, UrlAnalyzer};
use log::LevelFilter;
use std::process;

const EXIT_DANGEROUS: i32 = 2;

fn main() {
    let matches = Command::new("linkscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic URL risk scanner")
        .long_about(
            "linkscan scores links against trusted-domain, shortener, keyword and \
             phishing-pattern lists plus a few structural checks, and buckets each \
             one as safe, suspicious or dangerous.\n\
             Exits with status 2 when any scanned link is dangerous.",
        )
        .arg(
            Arg::new("urls")
                .value_name("URL")
                .help("URLs to analyze")
                .num_args(0..)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Read URLs from a file, one per line ('#' starts a comment)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Analyzer configuration file path")
                .default_value("linkscan.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed the simulated domain age draw for reproducible output")
                .value_parser(clap::value_parser!(u64))
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("assume-established")
                .long("assume-established")
                .help("Treat every domain as established (no simulated age penalty)")
                .conflicts_with("seed")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-check detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("linkscan.yaml");

    let config = match AnalyzerConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    let analyzer = match UrlAnalyzer::from_config(&config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Invalid configuration: {e:#}");
            process::exit(1);
        }
    };

    let analyzer = if matches.get_flag("assume-established") {
        analyzer.with_domain_age(FixedDomainAge::established())
    } else if let Some(seed) = matches.get_one::<u64>("seed") {
        analyzer.with_domain_age(SimulatedDomainAge::seeded(
            config.new_domain_probability,
            *seed,
        ))
    } else {
        analyzer
    };

    let mut urls: Vec<String> = matches
        .get_many::<String>("urls")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if let Some(path) = matches.get_one::<String>("file") {
        match read_url_file(path) {
            Ok(mut from_file) => urls.append(&mut from_file),
            Err(e) => {
                eprintln!("Error reading URL file: {e:#}");
                process::exit(1);
            }
        }
    }

    if urls.is_empty() {
        eprintln!("No URLs given. Pass URLs as arguments or use --file.");
        process::exit(1);
    }

    let entries: Vec<ScanEntry> = urls
        .iter()
        .map(|url| ScanEntry::new(url.as_str(), analyzer.analyze(url)))
        .collect();
    let summary = BatchSummary::from_entries(&entries);
    log::debug!("{summary}");

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => match report::render_json(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing results: {e}");
                process::exit(1);
            }
        },
        _ => {
            for entry in &entries {
                println!("{}", report::render_text(entry));
            }
            if entries.len() > 1 {
                println!("📊 {summary}");
            }
        }
    }

    if summary.any_dangerous() {
        process::exit(EXIT_DANGEROUS);
    }
}

fn read_url_file(path: &str) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_url_list(&content))
}

fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn generate_default_config(path: &str) {
    let config = AnalyzerConfig::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Edit the lists to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
