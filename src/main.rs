use clap::{Parser, Subcommand};
use std::path::PathBuf;
use treebook::config::{self, Config, Overrides};
use treebook::output;
use treebook::pipeline::{self, Outcome};

#[derive(Parser)]
#[command(name = "treebook")]
#[command(about = "Turn a tree listing into GitBook stub pages and a SUMMARY.md")]
#[command(long_about = "\
Turn a tree listing into GitBook stub pages and a SUMMARY.md

Reads the output of a `tree`-style command and writes one markdown stub per
line, plus a table of contents linking them all.

Input (output.log):

  ├── src
  │   ├── main
  │   └── utils

Output:

  SUMMARY.md                 # - [src](your-content/src.md)
  your-content/              #   - [main](your-content/main.md)
  ├── src.md                 #   - [utils](your-content/utils.md)
  ├── main.md
  └── utils.md

Heading depth is the number of `│`/`|` bars plus `├──`/`└──` branches on
each line. Titles become file names: lowercased, punctuation collapsed to
dashes.

Run 'treebook gen-config' to generate a documented treebook.toml.")]
#[command(version)]
struct Cli {
    /// Tree listing to read [default: /home/ubuntu/output.log]
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Directory for stub pages [default: your-content]
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Table of contents file [default: SUMMARY.md]
    #[arg(long, global = true)]
    summary: Option<PathBuf>,

    /// Config file [default: ./treebook.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write stub pages and SUMMARY.md (the default)
    Build,
    /// Print the planned entries as JSON without writing anything
    Scan,
    /// Print the outline that would be generated without writing anything
    Check,
    /// Print a stock treebook.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let config = resolve_config(&cli)?;
            match pipeline::build(&config)? {
                Outcome::Done(report) => output::print_build_output(&report, &config.link_base()),
                Outcome::MissingInput(path) => output::print_missing_input(&path),
                Outcome::EmptyInput => output::print_empty_input(),
            }
        }
        Command::Scan => {
            let config = resolve_config(&cli)?;
            match pipeline::plan(&config)? {
                Outcome::Done(entries) => println!("{}", serde_json::to_string_pretty(&entries)?),
                Outcome::MissingInput(path) => output::print_missing_input(&path),
                Outcome::EmptyInput => output::print_empty_input(),
            }
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            match pipeline::plan(&config)? {
                Outcome::Done(entries) => output::print_check_output(&entries, &config.link_base()),
                Outcome::MissingInput(path) => output::print_missing_input(&path),
                Outcome::EmptyInput => output::print_empty_input(),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Stock defaults, then the config file, then CLI flags.
fn resolve_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(cli.config.as_deref(), &cwd)?;
    let config = Overrides {
        input: cli.input.clone(),
        content_dir: cli.content_dir.clone(),
        summary_path: cli.summary.clone(),
    }
    .apply(loaded);
    config.validate()?;
    Ok(config)
}
