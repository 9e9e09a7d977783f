/// Bank Linter: validates template banks against the matching contract.
///
/// Usage: bank_linter <bank.ron | dir> [more paths ...]

use mirage_engine::core::bank::{Severity, TemplateBank};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: bank_linter <bank.ron | dir> [more paths ...]");
        process::exit(0);
    }

    let mut files = Vec::new();
    for arg in &args[1..] {
        collect_bank_files(Path::new(arg), &mut files);
    }

    if files.is_empty() {
        eprintln!("ERROR: No .ron bank files found");
        process::exit(1);
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    println!("=== Bank Lint Report ===\n");

    for path in &files {
        let bank = match TemplateBank::load_from_ron(path) {
            Ok(bank) => bank,
            Err(e) => {
                println!("{}:", path.display());
                println!("  ERROR: failed to load: {}", e);
                total_errors += 1;
                continue;
            }
        };

        println!("{}: {} templates", path.display(), bank.entries.len());

        let issues = bank.lint();
        for issue in &issues {
            match issue.severity {
                Severity::Error => {
                    println!("  ERROR: {}", issue.message);
                    total_errors += 1;
                }
                Severity::Warning => {
                    println!("  WARNING: {}", issue.message);
                    total_warnings += 1;
                }
            }
        }

        if issues.is_empty() {
            println!("  All checks passed!");
        }
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        total_errors, total_warnings
    );

    if total_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn collect_bank_files(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(path) {
            for entry in entries.flatten() {
                let child = entry.path();
                if child.is_dir() {
                    collect_bank_files(&child, files);
                } else if child.extension().and_then(|s| s.to_str()) == Some("ron") {
                    files.push(child);
                }
            }
        }
    } else {
        eprintln!("Path not found: {}", path.display());
    }
}
