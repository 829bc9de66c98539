use crate::output::print_json;
use calc_core::flags::FeatureFlags;

pub fn run(flags: &FeatureFlags, json: bool) -> anyhow::Result<()> {
    if json {
        // Field order matches declaration order, same as entries()
        return print_json(flags);
    }

    println!("Feature Toggles:");
    for (name, enabled) in flags.entries() {
        println!(" - {}: {}", name, if enabled { "ON" } else { "OFF" });
    }
    Ok(())
}
