pub mod args;
pub mod commands;

pub use args::{ListArgs, ListFormat, RunArgs, ShowArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "amender")]
#[command(version = crate::VERSION)]
#[command(about = "Pipe text through named amendment transforms")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: list the catalog, inspect a transform with show, then run a pipeline over a file or stdin."
)]
pub struct Args {
    /// Path to the config file (default: ./amender.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "List available transforms",
        long_about = "List prints the catalog grouped by category in display order, as text or as JSON summaries.",
        after_help = "Example:\n    amender list --category paths"
    )]
    List(ListArgs),
    #[command(
        about = "Describe one transform",
        long_about = "Show prints the name, category, expected input and full description of the transform registered under KEY.",
        after_help = "Example:\n    amender show csv-to-json"
    )]
    Show(ShowArgs),
    #[command(
        about = "Run text through a pipeline of transforms",
        long_about = "Run builds a pipeline from an optional preset followed by the given keys, removes any requested steps, applies it to the input, and prints or saves the result.",
        after_help = "Examples:\n    amender run csv-to-tsv --input data.csv\n    echo 'C:\\Users\\me' | amender run git-bash-2\n    amender run --preset tidy json-ext --input notes.txt --save"
    )]
    Run(RunArgs),
    #[command(
        about = "List configured presets",
        long_about = "Presets prints every named pipeline from the [presets] table of the config file."
    )]
    Presets,
}

pub fn run(args: Args) -> crate::Result<()> {
    let config_path = args.config.as_deref();
    match args.command {
        Command::List(list_args) => commands::list(list_args),
        Command::Show(show_args) => commands::show(show_args),
        Command::Run(run_args) => commands::run(run_args, config_path),
        Command::Presets => commands::presets(config_path),
    }
}
