use calc_core::fixed::FixedCalculator;
use clap::Parser;

// Scope is fixed per the signed-off requirements: addition and subtraction
// of two numbers, one operation per invocation. Anything else needs a
// formal change request and a new release.

#[derive(Parser)]
#[command(
    name = "waterfall-calc",
    about = "Fixed-scope calculator: add and subtract only",
    version
)]
struct Cli {
    /// Operation: add or subtract
    op: String,
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

fn main() {
    // Testing happens before "release": assertions run once, before any
    // argument handling.
    self_test();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            eprintln!("Usage: waterfall-calc <add|subtract> <a> <b>");
            std::process::exit(1);
        }
    };

    let calc = FixedCalculator::new();
    let result = match cli.op.as_str() {
        "add" => calc.add(cli.a, cli.b),
        "subtract" => calc.subtract(cli.a, cli.b),
        other => {
            // No flexibility: unsupported operations are rejected
            eprintln!("Error: operation '{other}' not allowed by scope. Use 'add' or 'subtract' only.");
            std::process::exit(2);
        }
    };

    println!("{}", result);
}

fn self_test() {
    let calc = FixedCalculator::new();
    assert_eq!(calc.add(5.0, 3.0), 8.0);
    assert_eq!(calc.subtract(5.0, 3.0), 2.0);
}
