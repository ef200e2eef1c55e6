//! edsel - Keep a registry of editors and open files with them
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use edsel_app::output::{format_open_report, format_record, format_table, to_json};
use edsel_app::{
    resolve_registry_path, AddEditorRequest, CommandFacade, ConfigStore, EditorFilter,
    EditorRecord, Launcher, OutputFormat, ProcessLauncher,
};
use edsel_core::prelude::*;

/// edsel - Keep a registry of editors and open files with them
#[derive(Parser, Debug)]
#[command(name = "edsel", version)]
#[command(about = "Keep a registry of editors and open files with them", long_about = None)]
struct Args {
    /// Registry file to use (default: $EDSEL_CONFIG, then the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print records and reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new editor
    AddEditor {
        /// Unique name (case-insensitive)
        #[arg(long)]
        name: String,

        /// Executable path or command name
        #[arg(long)]
        path: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Make this the default editor
        #[arg(long = "default")]
        make_default: bool,

        /// Replace an existing editor with the same name
        #[arg(long)]
        force: bool,

        /// Arguments passed before the file on every launch (must come last)
        #[arg(
            long,
            value_name = "OPTION",
            num_args = 1..,
            allow_hyphen_values = true
        )]
        options: Vec<String>,
    },

    /// Show registered editors
    ListEditors {
        /// Only show the editor with this name
        #[arg(long, conflicts_with = "default")]
        name: Option<String>,

        /// Only show the default editor
        #[arg(long)]
        default: bool,
    },

    /// Remove an editor (no-op if it is not registered)
    RemoveEditor {
        name: String,
    },

    /// Make an editor the default
    SetDefault {
        name: String,
    },

    /// Open files in an editor
    Open {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Editor to use instead of the default
        #[arg(long, short)]
        editor: Option<String>,

        /// Wait for the editor to exit before opening the next file
        #[arg(long)]
        wait: bool,
    },

    /// Print the location of the registry file
    ConfigPath,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; a broken log directory must not block commands
    if let Err(e) = edsel_core::logging::init() {
        eprintln!("warning: logging disabled: {}", e);
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let registry_path = resolve_registry_path(args.config.as_deref());

    if let Command::ConfigPath = args.command {
        println!("{}", registry_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let launcher = match args.command {
        Command::Open { wait: true, .. } => ProcessLauncher::waiting(),
        _ => ProcessLauncher::new(),
    };

    let result = ConfigStore::load(&registry_path).and_then(|store| {
        let mut facade = CommandFacade::new(store, launcher);
        debug!("Using registry {:?}", facade.config_path());
        run(&mut facade, args.command, format)
    });

    if let Err(ref e) = result {
        error!("Command failed: {:?}", e);
        if e.is_fatal() {
            eprintln!(
                "hint: fix or delete {} and run the command again",
                registry_path.display()
            );
        }
    }
    Ok(result?)
}

fn run<L: Launcher>(
    facade: &mut CommandFacade<L>,
    command: Command,
    format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Command::AddEditor {
            name,
            path,
            description,
            make_default,
            force,
            options,
        } => {
            let record = facade.add_editor(AddEditorRequest {
                name,
                description,
                path,
                options,
                make_default,
                overwrite: force,
            })?;
            print_record(&record, format)?;
        }

        Command::ListEditors { name, default } => {
            let filter = match (name, default) {
                (Some(name), _) => EditorFilter::Name(name),
                (None, true) => EditorFilter::Default,
                (None, false) => EditorFilter::All,
            };
            let records = facade.list_editors(&filter)?;
            match format {
                OutputFormat::Json => print!("{}", to_json(&records)?),
                OutputFormat::Human if filter == EditorFilter::All => {
                    print!("{}", format_table(&records))
                }
                OutputFormat::Human => {
                    for record in &records {
                        print!("{}", format_record(record));
                    }
                }
            }
        }

        Command::RemoveEditor { name } => {
            let removed = facade.remove_editor(&name)?;
            match (format, &removed) {
                (OutputFormat::Json, _) => print!("{}", to_json(&removed)?),
                (OutputFormat::Human, Some(record)) => println!("Removed editor {}", record.name),
                (OutputFormat::Human, None) => {
                    println!("No editor named '{}'; nothing to remove", name)
                }
            }
        }

        Command::SetDefault { name } => {
            let record = facade.set_default_editor(&name)?;
            print_record(&record, format)?;
        }

        Command::Open { files, editor, .. } => {
            let report = facade.open(&files, editor.as_deref())?;

            match format {
                OutputFormat::Json => print!("{}", to_json(&report)?),
                OutputFormat::Human => print!("{}", format_open_report(&report)),
            }
            for err in report.errors() {
                eprintln!("error: {}", err);
            }

            // Partial failures are reported; only a total failure changes the exit status
            if report.all_failed() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::ConfigPath => println!("{}", facade.config_path().display()),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_record(record: &EditorRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print!("{}", to_json(record)?),
        OutputFormat::Human => print!("{}", format_record(record)),
    }
    Ok(())
}
