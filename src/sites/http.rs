// src/sites/http.rs
// =============================================================================
// This module checks whether sites are reachable by making HTTP requests.
//
// Key functionality:
// - Validates every URL up front, before any request goes out
// - Makes one GET request per site, sequentially, in input order
// - Classifies each response: UP for 2xx, DOWN for anything else
// - Two policies for transport errors (DNS failure, refused connection,
//   timeout): Strict fails the whole batch, Lenient marks that one site
//   DOWN and keeps going
//
// The checks are deliberately sequential: the output order must match the
// input order exactly, and these lists are short enough that fanning out
// requests buys nothing worth the complexity.
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::task::{TaskError, TaskResult};

// Whether a site answered with a successful response
//
// Serializes as "UP" / "DOWN" - the labels callers see in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SiteState {
    Up,
    Down,
}

impl SiteState {
    /// Label used in human-readable output
    pub fn label(&self) -> &'static str {
        match self {
            SiteState::Up => "UP",
            SiteState::Down => "DOWN",
        }
    }
}

// One checked site: the URL we hit and how it answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStatus {
    pub site: String,
    pub status: SiteState,
}

// Result envelope for the sites task
//
// Serializes as {"changed": bool, "status": [{"site": ..., "status": ...}]}
// with records in the same order the sites were passed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesReport {
    pub changed: bool,
    pub status: Vec<SiteStatus>,
}

// The seeded default: what a check-mode run hands back untouched
impl Default for SitesReport {
    fn default() -> Self {
        SitesReport {
            changed: false,
            status: Vec::new(),
        }
    }
}

// How to treat a request that fails at the transport level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole batch on the first transport error
    #[default]
    Strict,
    /// Record that one site as DOWN and continue with the rest
    Lenient,
}

// Options for the sites task
#[derive(Debug, Clone)]
pub struct SitesArgs {
    /// Site URLs to check, in the order they should be reported
    pub sites: Vec<String>,
    /// When true, skip all network I/O and return the default report
    pub check_mode: bool,
    /// What to do when a request fails before getting any HTTP response
    pub policy: ErrorPolicy,
}

// Runs the sites task.
//
// For each site, in input order: one GET request, classified UP if the
// response status is 2xx and DOWN otherwise. Transport errors are handled
// per the configured policy.
pub async fn run_sites(args: &SitesArgs) -> TaskResult<SitesReport> {
    // Seed the default report first, like every task does.
    // In check mode we return it as-is: no client, no requests.
    let report = SitesReport::default();
    if args.check_mode {
        return Ok(report);
    }

    // Argument pre-checks: the list must be non-empty, and every entry
    // must be a parseable URL. Checking all of them before the first
    // request means a bad list never half-executes.
    if args.sites.is_empty() {
        return Err(TaskError::InvalidArgument(
            "please pass at least 1 site".to_string(),
        ));
    }
    for site in &args.sites {
        Url::parse(site).map_err(|e| {
            TaskError::InvalidArgument(format!("invalid site url '{}': {}", site, e))
        })?;
    }

    // One client reused across all requests (connection pooling)
    let client = build_client()?;

    let mut status = Vec::with_capacity(args.sites.len());

    for site in &args.sites {
        let state = match client.get(site).send().await {
            // Got an HTTP response: 2xx is UP, everything else is DOWN
            Ok(response) => {
                if response.status().is_success() {
                    SiteState::Up
                } else {
                    SiteState::Down
                }
            }
            // No HTTP response at all (DNS, refused, timeout, ...)
            Err(err) => match args.policy {
                ErrorPolicy::Strict => return Err(TaskError::Http(err)),
                ErrorPolicy::Lenient => SiteState::Down,
            },
        };

        status.push(SiteStatus {
            site: site.clone(),
            status: state,
        });
    }

    Ok(SitesReport {
        changed: true,
        status,
    })
}

// Builds the HTTP client with reasonable settings:
// 10 second timeout per request, follow up to 5 redirects
fn build_client() -> TaskResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}
