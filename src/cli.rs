// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. Two subcommands, one per task:
// - area:  compute the area of a circle
// - sites: check websites for HTTP reachability
//
// Flags shared by both tasks:
// - --check: check mode, a dry run that returns the default result without
//   computing anything or touching the network
// - --json:  print the result envelope as JSON instead of human output
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "taskbox",
    version = "0.1.0",
    about = "A CLI toolbox of small automation tasks",
    long_about = "taskbox runs small, self-contained automation tasks: computing the area of \
                  a circle from its radius, and checking a list of websites for HTTP \
                  reachability. Results come back as a 'changed' flag plus the task output, \
                  printable as a table or as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the area of a circle from its radius
    ///
    /// Example: taskbox area --radius 2.5
    Area {
        /// Radius of the circle (must be >= 0)
        ///
        /// Negative values are accepted by the parser so the task itself
        /// can reject them with a proper message
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,

        /// Check mode: report the default result without computing
        #[arg(long)]
        check: bool,

        /// Output the result envelope as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a list of websites for HTTP reachability (UP/DOWN)
    ///
    /// Example: taskbox sites http://example.com https://www.rust-lang.org
    Sites {
        /// Site URLs to check, reported in this order
        ///
        /// Positional, at least one required
        #[arg(required = true)]
        sites: Vec<String>,

        /// Mark a site DOWN on transport errors (DNS, refused, timeout)
        /// instead of failing the whole batch
        #[arg(long)]
        lenient: bool,

        /// Check mode: report the default result without any network call
        #[arg(long)]
        check: bool,

        /// Output the result envelope as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_area_command() {
        let cli = Cli::try_parse_from(["taskbox", "area", "--radius", "2.5", "--json"]).unwrap();
        match cli.command {
            Commands::Area {
                radius,
                check,
                json,
            } => {
                assert_eq!(radius, 2.5);
                assert!(!check);
                assert!(json);
            }
            _ => panic!("expected area subcommand"),
        }
    }

    #[test]
    fn test_parse_sites_command_keeps_order() {
        let cli = Cli::try_parse_from([
            "taskbox",
            "sites",
            "http://a.example",
            "http://b.example",
            "--lenient",
        ])
        .unwrap();
        match cli.command {
            Commands::Sites { sites, lenient, .. } => {
                assert_eq!(sites, vec!["http://a.example", "http://b.example"]);
                assert!(lenient);
            }
            _ => panic!("expected sites subcommand"),
        }
    }

    #[test]
    fn test_parse_negative_radius() {
        let cli = Cli::try_parse_from(["taskbox", "area", "--radius", "-1"]).unwrap();
        match cli.command {
            Commands::Area { radius, .. } => assert_eq!(radius, -1.0),
            _ => panic!("expected area subcommand"),
        }
    }

    #[test]
    fn test_sites_requires_at_least_one_url() {
        assert!(Cli::try_parse_from(["taskbox", "sites"]).is_err());
    }
}
