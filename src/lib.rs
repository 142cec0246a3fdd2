//
// lib.rs
// tivcmp
//
// Library entry that re-exports modules so the binary and tests can access
// CLI parsing, directory scanning, renderer invocation, and the comparison
// loop.
//
pub mod cli;
pub mod error;
pub mod harness;
pub mod render;
pub mod scanner;

pub use cli::{build_options, Args, Options};
pub use error::HarnessError;
pub use harness::{run_compare, Counters};
pub use render::{trim_capture, CommandRenderer, RenderMode, Renderer};
pub use scanner::{list_pngs, PngEntry};
