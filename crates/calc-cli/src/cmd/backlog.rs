use crate::output::print_json;
use calc_core::backlog;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&backlog::items());
    }

    println!("Product Backlog:");
    for item in backlog::items() {
        println!(" - {}", item);
    }
    Ok(())
}
