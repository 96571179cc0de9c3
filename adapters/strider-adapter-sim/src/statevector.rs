//! Statevector evolution engine.

use num_complex::Complex64;
use std::f64::consts::PI;

use strider_ir::{GateOp, SingleQubitGate};

/// A statevector representing a quantum state.
///
/// Amplitude index bit `q` holds the state of qubit `q`.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Apply a gate operation to the statevector.
    pub fn apply(&mut self, op: &GateOp) {
        match op {
            GateOp::Single { gate, qubit } => {
                let q = qubit.0 as usize;
                match gate {
                    SingleQubitGate::H => self.apply_h(q),
                    SingleQubitGate::X => self.apply_x(q),
                    SingleQubitGate::S => self.apply_phase(q, PI / 2.0),
                }
            }
            GateOp::MultiControlledX { controls, target } => {
                let ctrl_mask: usize = controls.iter().map(|c| 1usize << c.0).sum();
                self.apply_mcx(ctrl_mask, target.0 as usize);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_mcx(&mut self, ctrl_mask: usize, target: usize) {
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Sample a measurement outcome from the current state.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_ir::QubitId;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn single(gate: SingleQubitGate, qubit: u32) -> GateOp {
        GateOp::Single {
            gate,
            qubit: QubitId(qubit),
        }
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(sv.amplitudes[i], Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply(&single(SingleQubitGate::H, 0));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply(&single(SingleQubitGate::X, 0));

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_s_gate_phases_the_one_component() {
        let mut sv = Statevector::new(1);
        sv.apply(&single(SingleQubitGate::X, 0));
        sv.apply(&single(SingleQubitGate::S, 0));

        // S|1⟩ = i|1⟩
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 1.0)));
    }

    #[test]
    fn test_mcx_fires_only_with_all_controls_set() {
        let mcx = GateOp::MultiControlledX {
            controls: vec![QubitId(0), QubitId(1)],
            target: QubitId(2),
        };

        // |011⟩ (both controls set): target flips to |111⟩.
        let mut sv = Statevector::new(3);
        sv.apply(&single(SingleQubitGate::X, 0));
        sv.apply(&single(SingleQubitGate::X, 1));
        sv.apply(&mcx);
        assert!(approx_eq(sv.amplitudes[0b111], Complex64::new(1.0, 0.0)));

        // |001⟩ (one control set): nothing happens.
        let mut sv = Statevector::new(3);
        sv.apply(&single(SingleQubitGate::X, 0));
        sv.apply(&mcx);
        assert!(approx_eq(sv.amplitudes[0b001], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1);
        sv.apply(&single(SingleQubitGate::X, 0));

        for _ in 0..100 {
            assert_eq!(sv.sample(), 1);
        }
    }
}
