use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use flagext::{
    compilation_from_json,
    diagnostics_to_json,
    quickfix::fixes_for,
    run_pass,
    CancellationToken,
    Compilation,
    FlagExtError,
    GeneratorOptions,
    PassOutput,
};
use flagext_compiler::DiagnosticKind;

#[derive(Parser)]
#[command(name = "flagext")]
#[command(about = "Generate boolean flag and group accessors from enumeration metadata", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate accessor sources for every type in a compilation
    Generate {
        /// Input compilation `.json` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator options `.json` file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not emit extension-block properties
        #[arg(long)]
        no_properties: bool,

        /// Do not emit extension methods
        #[arg(long)]
        no_methods: bool,
    },

    /// Analyze a compilation and report diagnostics only
    Check {
        /// Input compilation `.json` file
        #[arg(short, long)]
        input: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the diagnostic catalog
    Catalog,

    /// List available fixes for unknown group references
    Fixes {
        /// Input compilation `.json` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_compilation(path: &Path) -> Result<Compilation, FlagExtError> {
    let text = fs::read_to_string(path)?;
    compilation_from_json(&text)
}

fn read_options(path: Option<&Path>) -> Result<GeneratorOptions, FlagExtError> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(GeneratorOptions::default()),
    }
}

fn report(out: &PassOutput) {
    for diagnostic in &out.diagnostics {
        eprintln!("{}", diagnostic);
    }
}

fn main() -> Result<(), FlagExtError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Generate { input, output, config, no_properties, no_methods } => {
            let compilation = read_compilation(input)?;
            let mut options = read_options(config.as_deref())?;
            options.properties &= !no_properties;
            options.methods &= !no_methods;
            debug!("generator options: {:?}", options);

            let out = run_pass(&compilation, &options, &CancellationToken::new())?;
            report(&out);

            match output {
                Some(dir) => {
                    fs::create_dir_all(dir)?;
                    for unit in &out.units {
                        let path = dir.join(&unit.hint_name);
                        fs::write(&path, &unit.text)?;
                        println!("Generated {} → {}", unit.type_name, path.display());
                    }
                }
                None => {
                    for unit in &out.units {
                        println!("// {}\n{}", unit.hint_name, unit.text);
                    }
                }
            }
            Ok(())
        }

        Commands::Check { input, json } => {
            let compilation = read_compilation(input)?;
            let out = run_pass(&compilation, &GeneratorOptions::default(), &CancellationToken::new())?;

            if *json {
                println!("{}", diagnostics_to_json(&out.diagnostics)?);
            } else {
                for diagnostic in &out.diagnostics {
                    println!("{}", diagnostic);
                }
                println!("{} diagnostic(s), {} error(s)", out.diagnostics.len(), out.error_count());
            }

            match out.error_count() {
                0 => Ok(()),
                n => Err(FlagExtError::DiagnosticErrors(n)),
            }
        }

        Commands::Catalog => {
            for kind in DiagnosticKind::ALL {
                println!("{:<16} {:<8} {}", kind.id(), kind.severity(), kind.title());
                println!("{:<16} {:<8} {}", "", "", kind.message_format());
            }
            Ok(())
        }

        Commands::Fixes { input } => {
            let compilation = read_compilation(input)?;
            let out = run_pass(&compilation, &GeneratorOptions::default(), &CancellationToken::new())?;

            for report in &out.types {
                let Some(raw) = compilation.enums.get(report.index).and_then(|d| d.symbol.as_ref()) else {
                    continue;
                };
                for diagnostic in report.diagnostics.iter().filter(|d| d.kind == DiagnosticKind::UnknownGroupName) {
                    println!("{}: {}", report.name, diagnostic);
                    for fix in fixes_for(diagnostic, raw) {
                        println!("  [{}] {}", fix.equivalence_key, fix.title);
                    }
                }
            }
            Ok(())
        }
    }
}
