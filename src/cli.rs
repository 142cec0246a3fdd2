use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan for .png files (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Display command invoked after each comparison block
    #[arg(long, default_value = "./display_image.sh")]
    pub display_script: PathBuf,

    /// Skip the display step after each comparison block
    #[arg(long)]
    pub no_display: bool,

    /// Print a run summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug)]
pub struct Options {
    pub dir: PathBuf,
    pub display_script: PathBuf,
    pub no_display: bool,
    pub verbose: bool,
}

pub fn build_options(args: &Args) -> Options {
    Options {
        dir: args.dir.clone(),
        display_script: args.display_script.clone(),
        no_display: args.no_display,
        verbose: args.verbose,
    }
}
