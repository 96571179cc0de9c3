//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, shot limits, and whether
//! results come from simulation. Adapters check submissions against
//! their own capabilities; callers can pre-check with [`Capabilities::accepts`]
//! to fail before submitting at all.

use serde::{Deserialize, Serialize};

/// Capabilities of an execution backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator or emulator (`true`) vs real hardware.
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into()],
        }
    }

    /// Check whether a program of `num_qubits` qubits and `shots` shots fits.
    pub fn accepts(&self, num_qubits: u32, shots: u32) -> bool {
        num_qubits <= self.num_qubits && shots <= self.max_shots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(24);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 24);
        assert!(caps.features.contains(&"statevector".to_string()));
    }

    #[test]
    fn test_accepts() {
        let caps = Capabilities::simulator(10);
        assert!(caps.accepts(10, 1024));
        assert!(!caps.accepts(11, 1024));
        assert!(!caps.accepts(4, 1_000_000));
    }
}
