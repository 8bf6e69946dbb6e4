//! Band selection and band-to-storage mapping
//!
//! Bands are addressed by labels relative to the Fermi level: labels `<= 0`
//! are valence bands, labels `> 0` are conduction bands. Internally every
//! band is stored by its absolute index `fermi_level + label`.

use crate::error::{ExcitonError, ValidationError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Largest accepted `n_bands` for a band window
pub const MAX_BAND_WINDOW: i64 = 100_000;

/// Valence and conduction bands taking part in an exciton calculation.
///
/// Both partitions keep the relative order in which the bands were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSet {
    fermi_level: i64,
    labels: Vec<i64>,
    valence: Vec<i64>,
    conduction: Vec<i64>,
}

impl BandSet {
    /// Partition relative band labels around the Fermi level
    ///
    /// # Arguments
    ///
    /// * `labels` - Band labels relative to the Fermi level, in any order
    /// * `fermi_level` - Absolute index of the highest occupied band
    ///
    /// Fails when either partition ends up empty, or when a label does not
    /// map to a representable absolute index.
    pub fn from_labels(labels: &[i64], fermi_level: i64) -> Result<Self, ValidationError> {
        let (valence_labels, conduction_labels): (Vec<i64>, Vec<i64>) =
            labels.iter().copied().partition(|&label| label <= 0);

        let absolute = |label: i64| {
            label
                .checked_add(fermi_level)
                .ok_or(ValidationError::BandOutOfRange(label))
        };
        let valence = valence_labels
            .into_iter()
            .map(absolute)
            .collect::<Result<Vec<i64>, _>>()?;
        let conduction = conduction_labels
            .into_iter()
            .map(absolute)
            .collect::<Result<Vec<i64>, _>>()?;

        if valence.is_empty() || conduction.is_empty() {
            return Err(ValidationError::EmptyBandPartition {
                n_valence: valence.len(),
                n_conduction: conduction.len(),
            });
        }

        Ok(BandSet {
            fermi_level,
            labels: labels.to_vec(),
            valence,
            conduction,
        })
    }

    /// Contiguous window of `n_bands - n_removed` bands on each side of the gap
    ///
    /// The `n_removed` bands closest to the Fermi level are left out on both
    /// sides: valence spans `[F - n_bands + 1, F - n_removed]` and conduction
    /// spans `[F + 1 + n_removed, F + n_bands]`.
    ///
    /// `n_bands` is capped at [`MAX_BAND_WINDOW`] and both window edges must
    /// be representable absolute indices.
    pub fn window(n_bands: i64, n_removed: i64, fermi_level: i64) -> Result<Self, ValidationError> {
        let invalid = ValidationError::InvalidBandWindow { n_bands, n_removed };
        if n_bands <= 0 || n_removed <= 0 || n_removed >= n_bands || n_bands > MAX_BAND_WINDOW {
            return Err(invalid);
        }
        let lowest = fermi_level.checked_sub(n_bands - 1);
        let highest = fermi_level.checked_add(n_bands);
        if lowest.is_none() || highest.is_none() {
            return Err(invalid);
        }

        let labels: Vec<i64> = (1 - n_bands..=-n_removed)
            .chain(1 + n_removed..=n_bands)
            .collect();

        BandSet::from_labels(&labels, fermi_level)
    }

    pub fn fermi_level(&self) -> i64 {
        self.fermi_level
    }

    /// Relative labels as they were supplied
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Absolute indices of the valence bands
    pub fn valence(&self) -> &[i64] {
        &self.valence
    }

    /// Absolute indices of the conduction bands
    pub fn conduction(&self) -> &[i64] {
        &self.conduction
    }

    /// Valence bands followed by conduction bands, absolute indices
    pub fn band_list(&self) -> Vec<i64> {
        self.valence
            .iter()
            .chain(self.conduction.iter())
            .copied()
            .collect()
    }
}

/// Dense storage slots for a set of absolute band indices.
///
/// Slots are handed out in input order, starting at zero. Looking up a band
/// that was never registered is an error rather than a default slot, since
/// a wrong slot silently corrupts Hamiltonian addressing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BandIndex {
    labels: Vec<i64>,
    slots: HashMap<i64, usize>,
}

impl BandIndex {
    /// Build the index; repeated labels keep their first slot
    pub fn new(labels: &[i64]) -> Self {
        let mut index = BandIndex {
            labels: Vec::with_capacity(labels.len()),
            slots: HashMap::with_capacity(labels.len()),
        };

        for &label in labels {
            if let Entry::Vacant(entry) = index.slots.entry(label) {
                entry.insert(index.labels.len());
                index.labels.push(label);
            }
        }

        index
    }

    /// Storage slot of `label`
    pub fn slot(&self, label: i64) -> Result<usize, ExcitonError> {
        self.slots
            .get(&label)
            .copied()
            .ok_or(ExcitonError::MissingBand(label))
    }

    /// Band stored at `slot`
    pub fn label(&self, slot: usize) -> Option<i64> {
        self.labels.get(slot).copied()
    }

    pub fn contains(&self, label: i64) -> bool {
        self.slots.contains_key(&label)
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<&BandSet> for BandIndex {
    fn from(bands: &BandSet) -> Self {
        BandIndex::new(&bands.band_list())
    }
}
