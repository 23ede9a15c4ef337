use std::ops::Range;
use thiserror::Error;

/// Errors raised while validating raw adjacency input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConnectivityError {
    #[error("Adjacency input describes {found} atoms but the configuration declares {expected}")]
    AtomCountMismatch { found: usize, expected: usize },

    #[error("Atom {atom} lists {found} neighbors, exceeding the per-atom bound of {max_neighbor}")]
    TooManyNeighbors {
        atom: usize,
        found: usize,
        max_neighbor: usize,
    },

    #[error("Neighbor entry {neighbor} of atom {atom} is outside the lattice of {number_of_atoms} atoms")]
    NeighborOutOfRange {
        atom: usize,
        neighbor: usize,
        number_of_atoms: usize,
    },

    #[error("Atom {atom} lists itself as a neighbor, which the input did not permit")]
    SelfLoop { atom: usize },
}

/// Errors raised while sizing the flattened pair table.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AllocationError {
    #[error("Pair table of {atoms} atoms x {max_neighbor} slots exceeds the addressable size")]
    PairTableTooLarge { atoms: usize, max_neighbor: usize },
}

/// Computes the capacity of the flattened pair table, `N * max_neighbor`.
///
/// # Errors
///
/// Returns [`AllocationError::PairTableTooLarge`] if the product overflows the
/// addressable size, so the builder fails before attempting the allocation.
pub fn pair_table_capacity(
    number_of_atoms: usize,
    max_neighbor: usize,
) -> Result<usize, AllocationError> {
    number_of_atoms
        .checked_mul(max_neighbor)
        .filter(|&pairs| pairs <= isize::MAX as usize)
        .ok_or(AllocationError::PairTableTooLarge {
            atoms: number_of_atoms,
            max_neighbor,
        })
}

/// Represents the connectivity graph of a disordered lattice.
///
/// Neighbors are stored in a single flattened table of `N * max_neighbor` slots:
/// the neighbors of atom `i` occupy the fixed-stride slice
/// `[i * max_neighbor, i * max_neighbor + neighbor_number[i])`, order-preserved
/// from the input. Slots beyond `neighbor_number[i]` are zero-initialized padding
/// and must never be interpreted as neighbors; correct callers go through
/// [`neighbors`](Lattice::neighbors) or [`valid_slots`](Lattice::valid_slots),
/// which never expose them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    number_of_atoms: usize,
    max_neighbor: usize,
    neighbor_number: Vec<usize>,
    neighbor_list: Vec<usize>,
}

impl Lattice {
    /// Builds the fixed-stride connectivity table from per-atom adjacency lists.
    ///
    /// # Arguments
    ///
    /// * `adjacency` - One neighbor-index list per atom, order-preserved.
    /// * `number_of_atoms` - The declared atom count; must match `adjacency.len()`.
    /// * `max_neighbor` - The per-atom connectivity bound (table stride).
    /// * `allow_self_loops` - Whether an atom may list itself as a neighbor.
    ///
    /// # Return
    ///
    /// The validated lattice with every padding slot zero-initialized.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectivityError`] if the adjacency input disagrees with the
    /// declared atom count, an atom exceeds `max_neighbor`, a neighbor index falls
    /// outside `[0, number_of_atoms)`, or a self-loop appears without permission.
    pub fn from_adjacency(
        adjacency: &[Vec<usize>],
        number_of_atoms: usize,
        max_neighbor: usize,
        allow_self_loops: bool,
    ) -> Result<Self, ConnectivityError> {
        if adjacency.len() != number_of_atoms {
            return Err(ConnectivityError::AtomCountMismatch {
                found: adjacency.len(),
                expected: number_of_atoms,
            });
        }

        let mut neighbor_number = vec![0usize; number_of_atoms];
        let mut neighbor_list = vec![0usize; number_of_atoms * max_neighbor];

        for (atom, neighbors) in adjacency.iter().enumerate() {
            if neighbors.len() > max_neighbor {
                return Err(ConnectivityError::TooManyNeighbors {
                    atom,
                    found: neighbors.len(),
                    max_neighbor,
                });
            }

            for (slot, &neighbor) in neighbors.iter().enumerate() {
                if neighbor >= number_of_atoms {
                    return Err(ConnectivityError::NeighborOutOfRange {
                        atom,
                        neighbor,
                        number_of_atoms,
                    });
                }
                if neighbor == atom && !allow_self_loops {
                    return Err(ConnectivityError::SelfLoop { atom });
                }
                neighbor_list[atom * max_neighbor + slot] = neighbor;
            }

            neighbor_number[atom] = neighbors.len();
        }

        Ok(Self {
            number_of_atoms,
            max_neighbor,
            neighbor_number,
            neighbor_list,
        })
    }

    /// Returns the number of atoms in the lattice.
    pub fn number_of_atoms(&self) -> usize {
        self.number_of_atoms
    }

    /// Returns the per-atom connectivity bound (the table stride).
    pub fn max_neighbor(&self) -> usize {
        self.max_neighbor
    }

    /// Returns the capacity of the flattened pair table, `N * max_neighbor`.
    pub fn number_of_pairs(&self) -> usize {
        self.neighbor_list.len()
    }

    /// Returns the per-atom neighbor counts.
    pub fn neighbor_number(&self) -> &[usize] {
        &self.neighbor_number
    }

    /// Returns the full flattened neighbor table, padding slots included.
    ///
    /// Entries beyond `neighbor_number[i]` within each stride are padding;
    /// prefer [`neighbors`](Lattice::neighbors) for bounds-checked access.
    pub fn neighbor_list(&self) -> &[usize] {
        &self.neighbor_list
    }

    /// Returns the valid neighbors of `atom`, order-preserved from the input.
    ///
    /// # Panics
    ///
    /// Panics if `atom` is outside `[0, number_of_atoms)`.
    pub fn neighbors(&self, atom: usize) -> &[usize] {
        let start = atom * self.max_neighbor;
        &self.neighbor_list[start..start + self.neighbor_number[atom]]
    }

    /// Returns the range of valid pair-table slots belonging to `atom`.
    ///
    /// # Panics
    ///
    /// Panics if `atom` is outside `[0, number_of_atoms)`.
    pub fn valid_slots(&self, atom: usize) -> Range<usize> {
        let start = atom * self.max_neighbor;
        start..start + self.neighbor_number[atom]
    }

    /// Reports whether a pair-table slot holds a validated neighbor entry.
    pub fn is_valid_slot(&self, slot: usize) -> bool {
        let atom = slot / self.max_neighbor.max(1);
        atom < self.number_of_atoms && slot < atom * self.max_neighbor + self.neighbor_number[atom]
    }
}
