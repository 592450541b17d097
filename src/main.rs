mod debug_report;

use aerobatics::{parse, parse_verbose};
use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aerobatics")]
#[command(about = "Parse an aerobatic sequence signature and score its difficulty", version)]
#[command(after_help = "Exit codes:\n  0  Success.\n  1  Signature could not be scored.\n  2  Invalid arguments or missing input.")]
struct Args {
    /// Signature to parse. Remaining words are joined with spaces.
    #[arg(conflicts_with = "input")]
    signature: Vec<String>,

    /// Signature text. If omitted and no positional words are given, stdin is read.
    #[arg(short, long)]
    input: Option<String>,

    /// Print the sequence as JSON.
    #[arg(long, conflicts_with = "verbose")]
    json: bool,

    /// Print the per-maneuver scoring breakdown.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aerobatics=warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = match resolve_input(&args) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let color = if args.color {
        true
    } else if args.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    match run(&args, &input, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args, input: &str, color: bool) -> anyhow::Result<()> {
    if args.verbose {
        let res = parse_verbose(input)?;
        debug_report::print_run(&res, color);
    } else if args.json {
        let seq = parse(input)?;
        println!("{}", serde_json::to_string_pretty(&seq)?);
    } else {
        let seq = parse(input)?;
        debug_report::print_summary(&seq, color);
    }
    Ok(())
}

fn resolve_input(args: &Args) -> Result<String, String> {
    let input = if let Some(value) = &args.input {
        value.clone()
    } else if !args.signature.is_empty() {
        args.signature.join(" ")
    } else {
        read_stdin_input()?
    };

    if input.trim().is_empty() {
        return Err("error: no input provided (pass a signature, --input <text>, or pipe stdin)".to_string());
    }

    Ok(input)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}
