use crate::utils::math::binary_entropy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Binary target of the mushroom domain.
///
/// Parsing accepts both the long form and the single-letter UCI code,
/// ignoring ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ClassLabel {
    #[strum(to_string = "edible", serialize = "e")]
    Edible,
    #[strum(to_string = "poisonous", serialize = "p")]
    Poisonous,
}

impl ClassLabel {
    /// Position of the label in vote vectors.
    pub fn index(self) -> usize {
        match self {
            ClassLabel::Edible => 0,
            ClassLabel::Poisonous => 1,
        }
    }

    /// Majority label of a class distribution. Edible only wins with a
    /// strictly larger count, so ties go to poisonous.
    pub fn majority(edible: usize, poisonous: usize) -> ClassLabel {
        if edible > poisonous {
            ClassLabel::Edible
        } else {
            ClassLabel::Poisonous
        }
    }
}

/// Edible/poisonous counts of a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub edible: usize,
    pub poisonous: usize,
}

impl ClassCounts {
    pub fn new(edible: usize, poisonous: usize) -> Self {
        Self { edible, poisonous }
    }

    pub fn add(&mut self, label: ClassLabel) {
        match label {
            ClassLabel::Edible => self.edible += 1,
            ClassLabel::Poisonous => self.poisonous += 1,
        }
    }

    pub fn get(&self, label: ClassLabel) -> usize {
        match label {
            ClassLabel::Edible => self.edible,
            ClassLabel::Poisonous => self.poisonous,
        }
    }

    pub fn total(&self) -> usize {
        self.edible + self.poisonous
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn is_pure(&self) -> bool {
        self.edible == 0 || self.poisonous == 0
    }

    pub fn majority(&self) -> ClassLabel {
        ClassLabel::majority(self.edible, self.poisonous)
    }

    pub fn entropy(&self) -> f64 {
        binary_entropy(self.edible, self.poisonous)
    }
}
