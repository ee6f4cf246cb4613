use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use levelprint_detect::{DegeneratePolicy, Detector, DetectorConfig, Diagnostic};
use levelprint_level::{load_points, InputFormat};
use levelprint_store::FileStore;
use levelprint_types::{Category, ClassifiedPoint, Fingerprint};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let detector = Detector::open(config)?;
    let format = cli.format;

    match cli.command {
        Command::Register(args) => cmd_register(&detector, args, format),
        Command::Detect(args) => cmd_detect(&detector, args, format),
        Command::List => cmd_list(&detector, format),
        Command::Show(args) => cmd_show(&detector, args, format),
        Command::Inspect(args) => cmd_inspect(&detector, args, format),
        Command::Remove(args) => cmd_remove(&detector, args, format),
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<DetectorConfig> {
    let mut config = match &cli.config {
        Some(path) => DetectorConfig::load(path)?,
        None => DetectorConfig::default(),
    };
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }
    if cli.strict {
        config.policy = DegeneratePolicy::Strict;
    }
    Ok(config)
}

fn read_points(path: &Path) -> anyhow::Result<Vec<ClassifiedPoint>> {
    load_points(path, InputFormat::from_path(path))
        .with_context(|| format!("failed to load level {}", path.display()))
}

fn cmd_register(
    detector: &Detector<FileStore>,
    args: RegisterArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let points = read_points(&args.file)?;
    let diagnostics = detector.register(args.id, &points)?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "id": args.id,
            "objects": points.len(),
            "diagnostics": diagnostics,
        }))?,
        OutputFormat::Text => {
            println!(
                "{} Registered level {} ({} objects)",
                "✓".green().bold(),
                args.id.to_string().yellow(),
                points.len()
            );
        }
    }
    Ok(())
}

fn cmd_detect(
    detector: &Detector<FileStore>,
    args: DetectArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let points = read_points(&args.file)?;
    let threshold = args.threshold.unwrap_or(detector.config().threshold);
    let detection = detector.detect_with_threshold(&points, threshold)?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "threshold": threshold,
            "matches": detection.matches,
            "diagnostics": detection.diagnostics,
        }))?,
        OutputFormat::Text => {
            if detection.matches.is_empty() {
                println!("No matches at threshold {threshold}.");
            } else {
                for m in &detection.matches {
                    println!(
                        "  match {} score {}",
                        m.id.to_string().yellow().bold(),
                        format!("{:.4}", m.score).cyan()
                    );
                }
            }
        }
    }
    Ok(())
}

fn cmd_list(detector: &Detector<FileStore>, format: OutputFormat) -> anyhow::Result<()> {
    let records = detector.records()?;
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = records
                .ids()
                .into_iter()
                .filter_map(|id| records.get(id).map(|fp| (id, fp)))
                .map(|(id, fp)| json!({ "id": id, "nonzero_bins": fp.nonzero_bins() }))
                .collect();
            print_json(&json!(rows))?;
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No levels registered.");
            }
            for id in records.ids() {
                if let Some(fp) = records.get(id) {
                    println!(
                        "{}  {} nonzero bins",
                        id.to_string().yellow(),
                        fp.nonzero_bins()
                    );
                }
            }
        }
    }
    Ok(())
}

fn cmd_show(
    detector: &Detector<FileStore>,
    args: ShowArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = detector.records()?;
    let fp = records
        .get(args.id)
        .with_context(|| format!("level {} is not registered", args.id))?;

    match format {
        OutputFormat::Json => {
            let mut value = fingerprint_summary(fp);
            value["id"] = json!(args.id);
            if args.hex {
                value["fingerprint"] = json!(fp.to_hex());
            }
            print_json(&value)?;
        }
        OutputFormat::Text => {
            println!("Level {}", args.id.to_string().yellow().bold());
            print_fingerprint(fp);
            if args.hex {
                println!("{}", fp.to_hex().dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_inspect(
    detector: &Detector<FileStore>,
    args: InspectArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let points = read_points(&args.file)?;
    let (fp, diagnostics) = detector.fingerprint(&points);

    match format {
        OutputFormat::Json => {
            let mut value = fingerprint_summary(&fp);
            value["objects"] = json!(points.len());
            value["diagnostics"] = json!(diagnostics);
            print_json(&value)?;
        }
        OutputFormat::Text => {
            println!("{} objects", points.len());
            for category in Category::ALL {
                let count = points.iter().filter(|p| p.category == category).count();
                println!("  {:<7} {count}", category.to_string());
            }
            print_fingerprint(&fp);
            print_diagnostics(&diagnostics);
        }
    }
    Ok(())
}

fn cmd_remove(
    detector: &Detector<FileStore>,
    args: RemoveArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    detector.remove(args.id)?;
    match format {
        OutputFormat::Json => print_json(&json!({ "removed": args.id }))?,
        OutputFormat::Text => println!("{} Removed level {}", "✓".green(), args.id.to_string().yellow()),
    }
    Ok(())
}

fn fingerprint_summary(fp: &Fingerprint) -> serde_json::Value {
    let segments: serde_json::Map<String, serde_json::Value> = Category::ALL
        .iter()
        .map(|c| (c.to_string(), json!(fp.segment_total(*c))))
        .collect();
    json!({
        "nonzero_bins": fp.nonzero_bins(),
        "total": fp.total(),
        "segments": segments,
    })
}

fn print_fingerprint(fp: &Fingerprint) {
    println!(
        "Fingerprint: {} nonzero bins, {} pairs",
        fp.nonzero_bins().to_string().bold(),
        fp.total()
    );
    for category in Category::ALL {
        let bins = fp.segment(category).iter().filter(|&&v| v != 0).count();
        println!(
            "  {:<7} {:>8} pairs in {bins} bins",
            category.to_string(),
            fp.segment_total(category)
        );
    }
}

/// Register and detect already log diagnostics through `tracing`; inspect
/// does not, so it prints them here.
fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        eprintln!("{} {d}", "warning:".yellow().bold());
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
