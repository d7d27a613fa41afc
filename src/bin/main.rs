use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use quadhash::config::{self, OptionsLayer, merge_layers};
use quadhash::{
    CodeUnit, DegeneratePolicy, Digest, DigestError, DigestOptions, DigestResult, QuadHasher,
    digest_all,
};

/// Deterministic 16-hex-digit fingerprints of text (not cryptographic)
#[derive(Parser)]
#[command(name = "quadhash")]
#[command(version)]
#[command(about = "Deterministic 16-hex-digit fingerprints of text (not cryptographic)")]
struct Cli {
    /// Options file layered over the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Character codes fed to the digit packer
    #[arg(long, global = true, value_enum)]
    code_unit: Option<CodeUnitArg>,

    /// Fail on inputs with a degenerate quadratic instead of falling back
    #[arg(long, global = true)]
    reject_degenerate: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CodeUnitArg {
    /// Raw UTF-8 bytes
    Byte,
    /// Unicode scalar values
    Char,
}

impl From<CodeUnitArg> for CodeUnit {
    fn from(arg: CodeUnitArg) -> Self {
        match arg {
            CodeUnitArg::Byte => CodeUnit::Byte,
            CodeUnitArg::Char => CodeUnit::Char,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print one digest per input (reads stdin lines when no input is given)
    Hash {
        /// Strings to digest
        inputs: Vec<String>,
    },
    /// Print every intermediate stage of one digest as JSON
    Explain {
        /// String to digest
        input: String,
    },
    /// Check that an input produces the expected digest
    Verify {
        /// String to digest
        input: String,
        /// Expected digest (16 hex digits)
        digest: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> DigestResult<ExitCode> {
    let options = resolve_options(&cli)?;
    log::debug!("Resolved options: {:?}", options);
    let hasher = QuadHasher::new(options);

    match cli.command {
        Commands::Hash { inputs } => {
            let inputs = if inputs.is_empty() {
                read_stdin_lines()?
            } else {
                inputs
            };
            Ok(hash_inputs(&hasher, &inputs))
        }
        Commands::Explain { input } => {
            let trace = hasher.trace(&input)?;
            let json = serde_json::to_string_pretty(&trace)?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { input, digest } => {
            let expected: Digest = digest.parse()?;
            let actual = hasher.digest(&input)?;
            if actual == expected {
                println!("OK");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("MISMATCH {}", actual);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Defaults < user config < --config file < command-line flags.
fn resolve_options(cli: &Cli) -> DigestResult<DigestOptions> {
    let mut layers = Vec::new();

    if let Some(user) = config::load_user_options()? {
        layers.push(user);
    }

    if let Some(path) = &cli.config {
        let layer = config::load_options_file(path)?.ok_or_else(|| {
            DigestError::config(format!("config file not found: {}", path.display()))
        })?;
        layers.push(layer);
    }

    layers.push(OptionsLayer {
        code_unit: cli.code_unit.map(CodeUnit::from),
        degenerate: cli.reject_degenerate.then_some(DegeneratePolicy::Reject),
    });

    Ok(merge_layers(&layers))
}

fn read_stdin_lines() -> DigestResult<Vec<String>> {
    let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

fn hash_inputs(hasher: &QuadHasher, inputs: &[String]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for entry in digest_all(hasher, inputs) {
        match entry.result {
            Ok(digest) => println!("{}", digest),
            Err(e) => {
                eprintln!("Error: input {:?}: {}", inputs[entry.index], e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
