use clap::Parser;
use friend_cli::output::format_fatal;
use friend_cli::{logging, prompt_for_file, CliConfig, CliError, Session};
use friend_graph::load_network;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "friend-cli")]
#[command(about = "Query and edit a friendship network loaded from a seed file", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed file (`name;friend_1;...;friend_n` per line). Prompted for when omitted.
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Verbose output (debug level logging)
    #[arg(long, short)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let quiet = cli.quiet || logging::quiet_from_env();
    logging::init(logging::log_level(cli.verbose, quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Load(err)) => {
            println!("{}", format_fatal(&err));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", format_fatal(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let path = match cli.file {
        Some(path) => path,
        None => prompt_for_file(&mut input, &mut output, &config.default_file)?,
    };

    let graph = load_network(&path)?;
    writeln!(output, "File {} successfully read.", path.display())?;

    let mut session = Session::new(graph).with_help(config.show_help);
    let end = session.run(&mut input, &mut output)?;
    info!(?end, "session finished");

    Ok(())
}
