use super::lattice::Lattice;
use thiserror::Error;

/// Errors raised when raw electronic-structure arrays disagree with the
/// connectivity table they must align to.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DataAlignmentError {
    #[error("Array '{name}' has {found} entries where {expected} are required")]
    LengthMismatch {
        name: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("Atom {atom}: array '{name}' supplies {found} bond entries for {expected} neighbors")]
    BondCountMismatch {
        name: &'static str,
        atom: usize,
        found: usize,
        expected: usize,
    },
}

/// Represents the electronic structure of a lattice, aligned slot-for-slot with
/// its connectivity table.
///
/// Hopping amplitudes and bond displacements live in pair-table layout: the entry
/// for the `k`-th neighbor of atom `i` sits at slot `i * max_neighbor + k`. A slot
/// is populated exactly when the corresponding neighbor slot is valid; padding
/// slots are zero-initialized and carry no physics. Raw physical units are
/// preserved here; rescaling into the Chebyshev domain is the energy-grid unit's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicStructure {
    hopping_real: Vec<f64>,
    hopping_imag: Vec<f64>,
    potential: Vec<f64>,
    xx: Vec<f64>,
}

impl ElectronicStructure {
    /// Builds the bond-aligned hopping, potential, and displacement arrays.
    ///
    /// `hopping_real` and `hopping_imag` carry one amplitude list per atom,
    /// parallel to its adjacency list; `hopping_imag` may be omitted for real
    /// Hamiltonians and defaults to zero. `position` holds the transport-axis
    /// coordinate of each atom; the bond displacement `xx` is computed per slot
    /// as `x[j] - x[i]`, wrapped to the minimum image in a periodic box of
    /// length `transport_box`.
    ///
    /// # Errors
    ///
    /// Returns a [`DataAlignmentError`] if any per-atom array disagrees with the
    /// atom count, or any per-bond list disagrees with the validated neighbor
    /// count of its atom.
    pub fn build(
        lattice: &Lattice,
        hopping_real: &[Vec<f64>],
        hopping_imag: Option<&[Vec<f64>]>,
        potential: &[f64],
        position: &[f64],
        transport_box: f64,
    ) -> Result<Self, DataAlignmentError> {
        let n = lattice.number_of_atoms();

        check_atom_count("hopping_real", hopping_real.len(), n)?;
        if let Some(imag) = hopping_imag {
            check_atom_count("hopping_imag", imag.len(), n)?;
        }
        check_atom_count("potential", potential.len(), n)?;
        check_atom_count("position", position.len(), n)?;

        let pairs = lattice.number_of_pairs();
        let mut real = vec![0.0; pairs];
        let mut imag = vec![0.0; pairs];
        let mut xx = vec![0.0; pairs];

        for atom in 0..n {
            let neighbors = lattice.neighbors(atom);
            let slots = lattice.valid_slots(atom);

            check_bond_count("hopping_real", atom, hopping_real[atom].len(), neighbors.len())?;
            real[slots.clone()].copy_from_slice(&hopping_real[atom]);

            if let Some(hopping_imag) = hopping_imag {
                check_bond_count("hopping_imag", atom, hopping_imag[atom].len(), neighbors.len())?;
                imag[slots.clone()].copy_from_slice(&hopping_imag[atom]);
            }

            for (slot, &neighbor) in slots.zip(neighbors) {
                xx[slot] = minimum_image(position[neighbor] - position[atom], transport_box);
            }
        }

        Ok(Self {
            hopping_real: real,
            hopping_imag: imag,
            potential: potential.to_vec(),
            xx,
        })
    }

    /// Returns the real part of the hopping amplitudes in pair-table layout.
    pub fn hopping_real(&self) -> &[f64] {
        &self.hopping_real
    }

    /// Returns the imaginary part of the hopping amplitudes in pair-table layout.
    pub fn hopping_imag(&self) -> &[f64] {
        &self.hopping_imag
    }

    /// Returns the on-site energy per atom.
    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    /// Returns the transport-axis bond displacements in pair-table layout.
    pub fn xx(&self) -> &[f64] {
        &self.xx
    }
}

fn check_atom_count(
    name: &'static str,
    found: usize,
    expected: usize,
) -> Result<(), DataAlignmentError> {
    if found == expected {
        Ok(())
    } else {
        Err(DataAlignmentError::LengthMismatch {
            name,
            found,
            expected,
        })
    }
}

fn check_bond_count(
    name: &'static str,
    atom: usize,
    found: usize,
    expected: usize,
) -> Result<(), DataAlignmentError> {
    if found == expected {
        Ok(())
    } else {
        Err(DataAlignmentError::BondCountMismatch {
            name,
            atom,
            found,
            expected,
        })
    }
}

/// Wraps a bond displacement to the minimum image of a periodic box.
fn minimum_image(mut dx: f64, box_length: f64) -> f64 {
    if box_length > 0.0 {
        if dx > 0.5 * box_length {
            dx -= box_length;
        } else if dx < -0.5 * box_length {
            dx += box_length;
        }
    }
    dx
}
