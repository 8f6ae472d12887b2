// src/sites/mod.rs
// =============================================================================
// The sites task: check a list of websites for HTTP reachability.
//
// Submodules:
// - http: issues the GET requests and classifies each site UP or DOWN
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `sites::run_sites()` instead of `sites::http::run_sites()`.
// =============================================================================

mod http;

pub use http::{run_sites, ErrorPolicy, SiteState, SiteStatus, SitesArgs, SitesReport};
