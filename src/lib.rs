//! nftlens - inspect deployment file traces
//!
//! Given a JavaScript bundle entry, this library asks an external file tracer
//! (`@vercel/nft`) for every file the entry pulls in, then reports which
//! top-level directories dominate the trace, which files fall outside the
//! project, and the common ancestor and handler path a deployment adapter
//! would compute.

pub mod analyzer;
pub mod ancestor;
pub mod cli;
pub mod config;
pub mod error;
pub mod grouping;
pub mod json_output;
pub mod node_tracer;
pub mod paths;
pub mod recorded;
pub mod report;
pub mod trace;
