// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate task (area, sites)
// 3. Print the result envelope (human-readable or JSON)
// 4. Exit with proper code (0 = success, 1 = at least one site DOWN,
//    2 = error)
//
// The binary is a stand-in for a host runtime: it feeds arguments to the
// task functions, honors check mode, serializes results, and turns failures
// into a {msg} envelope (JSON mode) or a stderr message.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use taskbox::area::{run_area, AreaArgs, AreaReport};
use taskbox::cli::{Cli, Commands};
use taskbox::sites::{run_sites, ErrorPolicy, SiteState, SitesArgs, SitesReport};
use taskbox::task::{FailureEnvelope, TaskError};

// The #[tokio::main] attribute transforms our async main into a real main
// function, creating a tokio runtime and running our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = task succeeded (all sites UP for the sites task)
//   Ok(1) = sites task ran, at least one site DOWN
//   Ok(2) = task failed (bad argument, strict-mode transport error)
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Area {
            radius,
            check,
            json,
        } => handle_area(radius, check, json),
        Commands::Sites {
            sites,
            lenient,
            check,
            json,
        } => handle_sites(sites, lenient, check, json).await,
    }
}

// Handles the 'area' subcommand
fn handle_area(radius: f64, check: bool, json: bool) -> Result<i32> {
    let args = AreaArgs {
        radius,
        check_mode: check,
    };

    let report = match run_area(&args) {
        Ok(report) => report,
        Err(e) => return report_failure(&e, AreaReport::default(), json),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !report.changed {
        println!("🔎 Check mode: nothing computed");
    } else {
        println!("📐 Area of circle with radius {}: {}", radius, report.area);
    }

    Ok(0)
}

// Handles the 'sites' subcommand
async fn handle_sites(sites: Vec<String>, lenient: bool, check: bool, json: bool) -> Result<i32> {
    let args = SitesArgs {
        sites,
        check_mode: check,
        policy: if lenient {
            ErrorPolicy::Lenient
        } else {
            ErrorPolicy::Strict
        },
    };

    if !check && !json {
        println!("🌐 Checking {} site(s)...\n", args.sites.len());
    }

    let report = match run_sites(&args).await {
        Ok(report) => report,
        Err(e) => return report_failure(&e, SitesReport::default(), json),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !report.changed {
        println!("🔎 Check mode: no sites checked");
    } else {
        print_table(&report);
    }

    // Count how many sites are down to pick the exit code
    let down_count = report
        .status
        .iter()
        .filter(|s| s.status == SiteState::Down)
        .count();

    if down_count > 0 {
        Ok(1) // Exit code 1 = at least one site DOWN
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Prints a task failure (JSON mode: the {msg, ...} envelope carrying the
// partially-built report; otherwise stderr) and maps it to exit code 2
fn report_failure<T: Serialize>(err: &TaskError, partial: T, json: bool) -> Result<i32> {
    if json {
        let envelope = FailureEnvelope::from_error(err, partial);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        eprintln!("❌ {}", err);
    }
    Ok(2)
}

// Prints site results as a human-readable table in the terminal
fn print_table(report: &SitesReport) {
    // Print table header
    println!("{:<60} {:<10}", "SITE", "STATUS");
    println!("{}", "=".repeat(70));

    for record in &report.status {
        let marker = match record.status {
            SiteState::Up => "✅",
            SiteState::Down => "❌",
        };
        let status_display = format!("{} {}", marker, record.status.label());

        println!("{:<60} {:<10}", truncate_site(&record.site), status_display);
    }

    println!();

    // Print summary
    let up_count = report
        .status
        .iter()
        .filter(|s| s.status == SiteState::Up)
        .count();
    let down_count = report.status.len() - up_count;

    println!("📊 Summary:");
    println!("   ✅ UP: {}", up_count);
    println!("   ❌ DOWN: {}", down_count);
    println!("   📋 Total: {}", report.status.len());
}

// Truncates a long URL for table display.
// Cuts on a character boundary so a multibyte URL cannot split
// mid-character and panic the slice.
fn truncate_site(site: &str) -> String {
    match site.char_indices().nth(57) {
        Some((idx, _)) => format!("{}...", &site[..idx]),
        None => site.to_string(),
    }
}
