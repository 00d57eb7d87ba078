//! ddb-mapper CLI - item converter generator
//!
//! Commands:
//! - `ddb-mapper generate` - Generate converters, schemas and builders
//! - `ddb-mapper check` - Validate item declarations without writing files

use clap::{Parser, Subcommand};
use ddb_mapper_codegen::{DestinationPackage, Visibility};
use std::path::PathBuf;

mod generate;
mod logging;
mod manifest;

#[derive(Parser)]
#[command(name = "ddb-mapper")]
#[command(author, version, about = "Code generator for ddb-mapper items", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate item converters, schemas and builders
    Generate {
        #[command(flatten)]
        options: CommonArgs,

        /// Crate source root to write into (default: [output] dir from the manifest)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate item declarations without writing files
    Check {
        #[command(flatten)]
        options: CommonArgs,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Path to ddb-mapper.toml
    #[arg(short, long, default_value = manifest::DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Generate builders even for records with a usable Default
    #[arg(long)]
    always_generate_builders: bool,

    /// Visibility of generated items (implicit, public, internal)
    #[arg(long)]
    visibility: Option<Visibility>,

    /// Destination module (relative:<suffix> or absolute:<path>)
    #[arg(long)]
    destination: Option<DestinationPackage>,

    /// Skip the Mapper table extension trait
    #[arg(long)]
    no_table_extension: bool,

    /// Exit with an error when any declaration was skipped
    #[arg(long)]
    deny_diagnostics: bool,
}

impl CommonArgs {
    fn into_args(self, out_dir: Option<PathBuf>) -> generate::Args {
        generate::Args {
            manifest: self.manifest,
            out_dir,
            overrides: generate::Overrides {
                always_generate_builders: self.always_generate_builders,
                visibility: self.visibility,
                destination: self.destination,
                no_table_extension: self.no_table_extension,
            },
            deny_diagnostics: self.deny_diagnostics,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Generate { options, out_dir } => {
            generate::run(&options.into_args(out_dir))?;
        }
        Commands::Check { options } => {
            generate::check(&options.into_args(None))?;
        }
    }

    Ok(())
}
