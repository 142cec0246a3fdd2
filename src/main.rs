use std::io;

use anyhow::Result;
use clap::Parser;

use tivcmp::cli::{build_options, Args};
use tivcmp::harness::run_compare;
use tivcmp::render::CommandRenderer;
use tivcmp::scanner::list_pngs;

fn main() -> Result<()> {
    let args = Args::parse();
    let opts = build_options(&args);

    let entries = list_pngs(&opts.dir)?;
    let renderer = CommandRenderer::new(opts.display_script.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let counters = run_compare(&entries, &renderer, &mut out, !opts.no_display)?;

    if opts.verbose {
        eprintln!("== tivcmp: summary ==");
        eprintln!("Compared: {}", counters.compared);
    }

    Ok(())
}
