//! Backends command implementation.

use console::style;

use strider_adapter_sim::SimulatorBackend;
use strider_hal::Backend;

/// Execute the backends command.
pub async fn execute() {
    println!("{} Available backends:", style("→").cyan().bold());

    let simulator = SimulatorBackend::new();
    match simulator.capabilities().await {
        Ok(caps) => {
            println!(
                "  {} — local statevector sampler, up to {} qubits, {} shots max",
                style(simulator.name()).green(),
                caps.num_qubits,
                caps.max_shots
            );
        }
        Err(e) => {
            println!(
                "  {} — unavailable: {e}",
                style(simulator.name()).red()
            );
        }
    }
}
