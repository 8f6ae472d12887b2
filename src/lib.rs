// src/lib.rs
// =============================================================================
// Library root for taskbox.
//
// taskbox bundles two small, independent automation tasks:
// - area:  compute the area of a circle from a radius
// - sites: check a list of websites for HTTP reachability (UP/DOWN)
//
// Each task follows the same contract: a typed options struct goes in, a
// typed result envelope (or a TaskError) comes out. The envelope carries a
// 'changed' flag, and every task honors a check-mode flag that short-circuits
// to the default envelope without doing any work.
//
// The CLI binary (src/main.rs) is a thin wrapper over these modules; keeping
// the logic in a library lets integration tests drive the tasks directly.
// =============================================================================

pub mod area;    // src/area/   - circle area calculation
pub mod cli;     // src/cli.rs  - command-line parsing
pub mod sites;   // src/sites/  - site reachability checking
pub mod task;    // src/task.rs - shared task contract (errors, envelopes)
