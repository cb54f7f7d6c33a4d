//! Process invocation and output parsing
//!
//! This module turns one external simulation run into one structured
//! measurement:
//!
//! ```text
//! runner/
//! ├── mod.rs       ← This file
//! ├── process.rs   ← Spawn a child process, capture stdout
//! ├── parser.rs    ← Fixed output grammar → RunResult
//! └── executor.rs  ← Executor trait + ProcessExecutor (process ∘ parser)
//! ```
//!
//! # Containment Policy
//!
//! Every failure mode of a single invocation — executable missing, output
//! not matching the grammar — is contained here and surfaces to the sweep
//! layer as [`RunResult::Unavailable`](crate::sweep::RunResult). The one
//! exception is a malformed numeric token in otherwise well-formed output:
//! that is a regression in the producing program, and the executor reports
//! it on stderr before containing it.

pub mod process;
pub mod parser;
pub mod executor;

// Re-export commonly used items for convenience
pub use process::run_captured;
pub use parser::{parse_run_output, COMPLETION_MARKER, ELAPSED_TOKEN_INDEX};
pub use executor::{Executor, ProcessExecutor};
