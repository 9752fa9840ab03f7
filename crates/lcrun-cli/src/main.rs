//! lcrun CLI
//!
//! A command-line tool for running saved coding-problem solutions against
//! local test input.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lcrun::{
    Config, EXAMPLE_CONFIG, InputMode, Language, LocalRun, OutputLog, RunError, RunOutcome,
    Runner, TestInput,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lcrun")]
#[command(about = "Run saved coding-problem solutions against local test input")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a solution file locally
    Run {
        /// Solution file containing an `@lc` marker line
        #[arg(value_name = "FILE")]
        source: PathBuf,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the marker-line metadata of a solution file
    Meta {
        /// Solution file containing an `@lc` marker line
        #[arg(value_name = "FILE")]
        source: PathBuf,
    },

    /// List supported language tags
    Languages,

    /// Initialize a new configuration file
    Init {
        /// Output path (default: lcrun.toml)
        #[arg(short, long, default_value = "lcrun.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    ShowConfig,
}

#[derive(Args)]
struct InputArgs {
    /// Test input given directly (skips the prompt)
    #[arg(short, long, conflicts_with = "input_file")]
    input: Option<String>,

    /// File whose contents are the test input (skips the prompt)
    #[arg(short = 'f', long, value_name = "PATH")]
    input_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        info!(?path, "loading configuration");
        Config::from_file(path).context("failed to load configuration")?
    } else {
        debug!("using default configuration");
        Config::default()
    };

    match cli.command {
        Commands::Run { source, input } => run_local(config, &source, input).await,
        Commands::Meta { source } => show_metadata(&source).await,
        Commands::Languages => {
            list_languages(&config);
            Ok(())
        }
        Commands::Init { output, force } => init_config(&output, force).await,
        Commands::ShowConfig => {
            show_config(&config);
            Ok(())
        }
    }
}

async fn run_local(config: Config, source: &Path, input: InputArgs) -> Result<()> {
    let mut log = OutputLog::new(config.output_channel.clone(), std::io::stdout());
    let runner = Runner::new(config);

    let result = async {
        let run = LocalRun::load(source).await?;
        info!(
            problem = %run.metadata().id,
            lang = %run.metadata().lang,
            "running solution locally"
        );
        let test_input = acquire_input(input).await?;
        run.execute(&runner, test_input).await
    }
    .await;

    // Single error boundary: one notification plus one log entry
    log.record(&result)
        .context("failed to write to the output channel")?;

    match result {
        Ok(RunOutcome::Completed { .. }) => {
            info!("Local run finished");
            Ok(())
        }
        Ok(RunOutcome::Cancelled) => {
            debug!("no test input provided, nothing was run");
            Ok(())
        }
        Err(e) => {
            error!("Local run failed, see the output above for details");
            debug!(error = ?e, "run error");
            std::process::exit(1);
        }
    }
}

/// Obtain test input from flags, or prompt for it on the terminal
async fn acquire_input(args: InputArgs) -> Result<Option<TestInput>, RunError> {
    if let Some(text) = args.input {
        return Ok(Some(TestInput::new(text)));
    }
    if let Some(path) = args.input_file {
        return read_input_file(&path).await.map(Some);
    }

    let mut prompt = Prompt::new();
    eprintln!("How do you want to provide test input?");
    for (index, mode) in [InputMode::Typed, InputMode::File].iter().enumerate() {
        eprintln!("  {}) {}", index + 1, mode.label());
    }
    let mode = match prompt.ask("> ").await?.as_deref() {
        Some("1") => InputMode::Typed,
        Some("2") => InputMode::File,
        _ => return Ok(None),
    };

    match mode {
        InputMode::Typed => Ok(prompt.ask("Test input: ").await?.map(TestInput::new)),
        InputMode::File => match prompt.ask("Input file: ").await? {
            Some(path) => read_input_file(Path::new(&path)).await.map(Some),
            None => Ok(None),
        },
    }
}

async fn read_input_file(path: &Path) -> Result<TestInput, RunError> {
    TestInput::from_file(path)
        .await
        .map_err(|source| RunError::Io {
            context: format!("read test input from {}", path.display()),
            source,
        })
}

/// Line-oriented terminal prompt
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Ask for one line; `None` when the user enters nothing or closes stdin
    async fn ask(&mut self, question: &str) -> Result<Option<String>, RunError> {
        eprint!("{question}");
        let line = self
            .lines
            .next_line()
            .await
            .map_err(|source| RunError::Io {
                context: "read from the terminal".to_owned(),
                source,
            })?;
        Ok(line.filter(|line| !line.is_empty()))
    }
}

async fn show_metadata(source: &Path) -> Result<()> {
    let run = LocalRun::load(source)
        .await
        .context("failed to read solution metadata")?;
    let metadata = run.metadata();
    println!("app:  {}", metadata.app);
    println!("id:   {}", metadata.id);
    println!("lang: {}", metadata.lang);
    match Language::from_tag(&metadata.lang) {
        Ok(language) => println!("runs as: {language}"),
        Err(e) => println!("runs as: - ({e})"),
    }
    Ok(())
}

fn list_languages(config: &Config) {
    println!("Supported languages:\n");

    let toolchains = &config.toolchains;
    for language in Language::ALL {
        let toolchain = match language {
            Language::Python => format!(
                "{} (fallback: {})",
                toolchains.python, toolchains.python_fallback
            ),
            Language::JavaScript | Language::TypeScript => toolchains.javascript.to_string(),
            Language::Java => format!("{} + {}", toolchains.javac, toolchains.java),
            Language::Cpp => toolchains.cpp.to_string(),
            Language::Go => format!("{} run", toolchains.go),
            Language::CSharp => "not implemented".to_owned(),
        };
        let steps = if language.is_compiled() {
            "compile + run"
        } else {
            "run"
        };
        let binding = if language.binds_arguments() {
            "calls solution"
        } else {
            "echo only"
        };
        println!(
            "  {:<24} {:<11} {:<14} {:<15} {}",
            language.tags().join(", "),
            language.name(),
            steps,
            binding,
            toolchain
        );
    }
}

fn show_config(config: &Config) {
    println!("Output channel: {}", config.output_channel);
    println!("Shortcuts: {}", config.shortcuts.join(", "));
    println!(
        "Run locally shown inline: {}",
        if config.shows_run_locally() { "yes" } else { "no" }
    );
    println!();
    println!("Toolchains:");
    let toolchains = &config.toolchains;
    println!("  python:          {}", toolchains.python);
    println!("  python_fallback: {}", toolchains.python_fallback);
    println!("  javascript:      {}", toolchains.javascript);
    println!("  javac:           {}", toolchains.javac);
    println!("  java:            {}", toolchains.java);
    println!("  cpp:             {}", toolchains.cpp);
    println!("  go:              {}", toolchains.go);
}

async fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at '{}'. Use --force to overwrite.",
            output.display()
        );
    }

    tokio::fs::write(output, EXAMPLE_CONFIG)
        .await
        .context("failed to write configuration file")?;

    println!("Created configuration file at '{}'", output.display());
    Ok(())
}
