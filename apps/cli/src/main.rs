//! formsmith CLI
//!
//! Builds form templates and records submissions in a local data directory.
//!
//! # Usage
//!
//! ```bash
//! formsmith template create "Survey" --description "Yearly check-in"
//! formsmith section add <TEMPLATE> "Intake"
//! formsmith field add <TEMPLATE> <SECTION> --kind number --label Age --required
//! formsmith submit <TEMPLATE> --values '{"Age": "30"}'
//! formsmith submissions --template <TEMPLATE> --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod context;
mod output;

use commands::{FieldCommands, SectionCommands, TemplateCommands};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Build form templates and collect validated submissions", long_about = None)]
struct Cli {
    /// Directory holding the template and submission lists
    #[arg(long, env = "FORMSMITH_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// TOML file with store settings (max_templates, number_policy, ...)
    #[arg(long, env = "FORMSMITH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage templates
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Manage sections of a template
    Section {
        #[command(subcommand)]
        action: SectionCommands,
    },
    /// Manage fields of a section
    Field {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// Validate answers and record them as a submission
    Submit {
        #[arg(value_parser = context::template_id)]
        template: formsmith_schema::id::TemplateId,
        /// JSON object keyed by field id or field label
        #[arg(long, conflicts_with = "file")]
        values: Option<String>,
        /// Read the JSON object from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List recorded submissions
    Submissions {
        /// Only submissions for this template
        #[arg(long, value_parser = context::template_id)]
        template: Option<formsmith_schema::id::TemplateId>,
    },
    /// Show the field types that can be added
    Palette,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match formsmith_log::init_with(context::log_config(cli.verbose)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let open = || context::open_store(cli.data_dir.as_deref(), cli.config.as_deref());

    match cli.command {
        Commands::Template { action } => commands::template::handle(action, &mut open()?, format),
        Commands::Section { action } => commands::section::handle(action, &mut open()?, format),
        Commands::Field { action } => commands::field::handle(action, &mut open()?, format),
        Commands::Submit {
            template,
            values,
            file,
        } => commands::submit::handle(&mut open()?, template, values, file, format),
        Commands::Submissions { template } => {
            commands::submit::list(&open()?, template, format);
            Ok(())
        }
        Commands::Palette => {
            commands::palette::handle(format);
            Ok(())
        }
    }
}
