use crate::output::print_json;
use anyhow::Context;
use calc_core::flags::FeatureFlags;
use calc_core::ops::Op;
use calc_core::toggle::ToggleCalculator;
use calc_core::CalcError;

pub fn run(flags: &FeatureFlags, op_name: &str, a: f64, b: f64, json: bool) -> anyhow::Result<()> {
    let mut calc = ToggleCalculator::new(flags);
    let outcome = op_name.parse::<Op>().and_then(|op| calc.run(op, a, b));

    match outcome {
        Ok(result) => {
            if json {
                #[derive(serde::Serialize)]
                struct RunOutput<'a> {
                    op: &'a str,
                    a: f64,
                    b: f64,
                    result: f64,
                }
                return print_json(&RunOutput {
                    op: op_name,
                    a,
                    b,
                    result,
                });
            }
            println!("{}", result);
        }
        // Disabled and unknown operations are reported, not fatal
        Err(e @ (CalcError::FeatureUnavailable(_) | CalcError::UnknownOperation(_))) => {
            println!("Not available yet: {}", e);
        }
        Err(e) => return Err(e).context("operation failed"),
    }

    Ok(())
}
