//! glintsh CLI - run scripts or start an interactive REPL.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use glintsh::cli_error::CliError;
use glintsh::config::Config;
use glintsh::{evaluate, make_global_env, parse, register_builtins, tokenize, Environment, Value};

type Result<T> = std::result::Result<T, CliError>;

/// glintsh - a small dynamically-typed, expression-oriented scripting language.
#[derive(Parser, Debug)]
#[command(name = "glintsh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run or explore glintsh scripts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable ANSI color in diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to a configuration file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a script file
    Run(RunCommand),
    /// Start an interactive REPL
    Repl,
}

#[derive(Parser, Debug)]
struct RunCommand {
    /// Path to the script file to run
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let no_color = cli.no_color;
    if let Err(e) = run_cli(cli) {
        report_error(&e.to_string(), no_color);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let no_color = cli.no_color || config.no_color;
    init_logging(cli.verbose || config.verbose, no_color);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Run(args) => run_file(&args.file),
        Commands::Repl => run_repl(no_color),
    }
}

fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    let subscriber = fmt::layer().with_ansi(!no_color).with_target(false);
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}

fn run_file(path: &PathBuf) -> Result<()> {
    let file_name = path.to_string_lossy().to_string();
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(file = %file_name, "running script");

    let value = run_source(&file_name, &source)?;
    if !matches!(value, Value::Null) {
        println!("{}", value.display_repr());
    }
    Ok(())
}

fn run_repl(no_color: bool) -> Result<()> {
    println!("glintsh {} - interactive mode (Ctrl-D to exit)", env!("CARGO_PKG_VERSION"));
    let mut editor = Editor::<()>::new().map_err(io_from_readline)?;
    let global = make_global_env();
    register_builtins(&global);

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                editor.add_history_entry(line.as_str());
                if line.trim().is_empty() {
                    continue;
                }
                match run_in_env(&line, &global) {
                    Ok(value) => {
                        if !matches!(value, Value::Null) {
                            println!("{}", value.display_repr());
                        }
                    }
                    // A bad line in the REPL is reported inline, not fatal - the loop keeps going.
                    Err(e) => report_error(&e.to_string(), no_color),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!(error = %e, "readline error");
                break;
            }
        }
    }
    Ok(())
}

/// Runs a fresh script in its own freshly built global environment.
fn run_source(file_name: &str, source: &str) -> Result<Value> {
    let global = make_global_env();
    register_builtins(&global);
    run_with_env(file_name, source, &global)
}

/// Runs one REPL line against the session's persistent environment.
fn run_in_env(source: &str, env: &Environment) -> Result<Value> {
    run_with_env("<repl>", source, env)
}

fn run_with_env(file_name: &str, source: &str, env: &Environment) -> Result<Value> {
    let tokens = tokenize(file_name, source).map_err(|e| CliError::Lex(e.render(source)))?;
    let ast = parse(tokens).map_err(|e| CliError::Syntax(e.render(source)))?;
    evaluate(&ast, env).map_err(|e| CliError::Runtime(e.render(source)))
}

fn report_error(message: &str, no_color: bool) {
    if no_color {
        eprintln!("error: {}", message);
    } else {
        eprintln!("\x1b[31merror:\x1b[0m {}", message);
    }
}

fn io_from_readline(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}
