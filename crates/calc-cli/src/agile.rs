use anyhow::Context;
use calc_cli::cmd;
use calc_core::flags::FeatureFlags;
use calc_core::ops::{self, Op};
use calc_core::toggle::ToggleCalculator;
use calc_core::CalcError;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agile-calc",
    about = "Iteratively grown calculator — feature toggles, an operation registry, and a backlog",
    version,
    override_usage = "agile-calc [OPTIONS] <backlog|features|<op> <a> <b>>",
    after_help = "Examples:\n  agile-calc add 5 3\n  agile-calc divide 10 0\n  agile-calc backlog\n  agile-calc features"
)]
struct Cli {
    /// Feature toggle config file (default: calc.yaml in the current directory)
    #[arg(long, global = true, env = "AGILE_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product backlog
    Backlog,

    /// Show feature toggles and their state
    Features,

    /// Any other invocation is treated as `<op> <a> <b>`
    #[command(external_subcommand)]
    Invoke(Vec<String>),
}

fn main() {
    // Continuous-testing habit: assertions run on every invocation, before
    // any CLI output is produced.
    self_test();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = dispatch(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("calc.yaml"));
    let flags = FeatureFlags::load(&config_path).context("failed to load feature toggles")?;

    match cli.command {
        None => print_usage(),
        Some(Commands::Backlog) => cmd::backlog::run(cli.json),
        Some(Commands::Features) => cmd::features::run(&flags, cli.json),
        Some(Commands::Invoke(args)) => invoke(&flags, &args, cli.json),
    }
}

fn invoke(flags: &FeatureFlags, args: &[String], json: bool) -> anyhow::Result<()> {
    // Malformed invocations fall back to usage; errors are printed, never
    // signaled via exit code on this path.
    let [op_name, a_str, b_str] = args else {
        return print_usage();
    };
    let (Ok(a), Ok(b)) = (ops::parse_operand(a_str), ops::parse_operand(b_str)) else {
        return print_usage();
    };
    cmd::run::run(flags, op_name, a, b, json)
}

fn print_usage() -> anyhow::Result<()> {
    Cli::command().print_help()?;
    Ok(())
}

fn self_test() {
    let mut calc = ToggleCalculator::new(&FeatureFlags::default());

    assert!((calc.run(Op::Add, 2.0, 3.0).unwrap() - 5.0).abs() < 1e-9);
    assert!((calc.run(Op::Subtract, 7.0, 4.0).unwrap() - 3.0).abs() < 1e-9);
    assert!((calc.run(Op::Multiply, 3.0, 4.0).unwrap() - 12.0).abs() < 1e-9);
    assert_eq!(calc.run(Op::Divide, 10.0, 0.0).unwrap(), f64::INFINITY);

    // History is toggled off by default; access must fail fast
    assert!(matches!(calc.history(), Err(CalcError::HistoryDisabled)));
}
