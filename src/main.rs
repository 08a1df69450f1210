use amender::cli::{self, Args};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    let _logging = amender::logging::init(args.config.as_deref(), args.verbose)?;
    cli::run(args)
}
