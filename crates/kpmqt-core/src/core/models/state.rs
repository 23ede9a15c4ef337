/// A caller-owned complex state vector in split real/imaginary layout.
///
/// This is the container the propagation engine hands to
/// `Model::initialize_state` once per random-vector realization; the call
/// overwrites every component (there is no partial-write contract). The split
/// layout matches the pair of per-atom phase arrays the model keeps internally
/// and is what a device backend would upload as two contiguous buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl StateVector {
    /// Creates a zero-filled state vector for `len` atoms.
    pub fn zeros(len: usize) -> Self {
        Self {
            real: vec![0.0; len],
            imag: vec![0.0; len],
        }
    }

    /// Returns the number of complex components.
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// Reports whether the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Returns the real components.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Returns the imaginary components.
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Returns mutable access to both component arrays.
    pub fn components_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.real, &mut self.imag)
    }
}
