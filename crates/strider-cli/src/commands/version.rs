//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - coined quantum walk construction and sampling",
        style("Strider").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  strider-ir           Walk-program intermediate representation");
    println!("  strider-walk         Walk construction, decoding, and statistics");
    println!("  strider-hal          Backend abstraction layer");
    println!("  strider-adapter-sim  Local statevector sampler");
    println!("  strider-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/strider-lab/strider").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
