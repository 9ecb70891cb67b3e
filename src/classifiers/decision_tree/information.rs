//! Entropy, information gain, split information and gain ratio over a set of
//! nominal records.

use crate::classifiers::decision_tree::options::SplitInformation;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::utils::math::entropy_term;

/// Borrowed view over the records that reach one node during induction.
#[derive(Debug, Clone)]
pub struct RecordSet<'a> {
    header: &'a InstanceHeader,
    records: Vec<&'a DenseInstance>,
}

impl<'a> RecordSet<'a> {
    pub fn new(header: &'a InstanceHeader, records: Vec<&'a DenseInstance>) -> Self {
        Self { header, records }
    }

    pub fn from_dataset(dataset: &'a Dataset) -> Self {
        Self::new(dataset.header(), dataset.iter().collect())
    }

    pub fn header(&self) -> &'a InstanceHeader {
        self.header
    }

    pub fn records(&self) -> &[&'a DenseInstance] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn class_counts(&self) -> Result<ClassCounts, ClassifierError> {
        let mut counts = ClassCounts::default();
        for record in &self.records {
            let label = record
                .class_label()
                .ok_or_else(|| ClassifierError::IncompleteRecord {
                    attribute: self.header.class_attribute().name().to_string(),
                })?;
            counts.add(label);
        }
        Ok(counts)
    }

    fn check_attribute(&self, attribute: usize) -> Result<usize, ClassifierError> {
        if !self.header.is_input_attribute(attribute) {
            return Err(ClassifierError::UnknownAttribute { index: attribute });
        }
        Ok(self.header.attributes()[attribute].number_of_values())
    }

    fn value_of(&self, record: &DenseInstance, attribute: usize) -> Result<usize, ClassifierError> {
        record
            .value_at_index(attribute)
            .ok_or_else(|| ClassifierError::IncompleteRecord {
                attribute: self.header.attribute_name(attribute),
            })
    }

    /// One subset per value of `attribute`'s full domain, in domain order.
    /// Subsets for values no record carries are empty.
    pub fn partition(&self, attribute: usize) -> Result<Vec<RecordSet<'a>>, ClassifierError> {
        let arity = self.check_attribute(attribute)?;
        let mut parts = vec![Vec::new(); arity];
        for &record in &self.records {
            parts[self.value_of(record, attribute)?].push(record);
        }
        Ok(parts
            .into_iter()
            .map(|records| RecordSet::new(self.header, records))
            .collect())
    }

    /// Class distribution of each value of `attribute`, in domain order.
    pub fn value_class_counts(&self, attribute: usize) -> Result<Vec<ClassCounts>, ClassifierError> {
        let arity = self.check_attribute(attribute)?;
        let class_attribute = self.header.class_attribute().name();
        let mut per_value = vec![ClassCounts::default(); arity];
        for record in &self.records {
            let value = self.value_of(record, attribute)?;
            let label = record
                .class_label()
                .ok_or_else(|| ClassifierError::IncompleteRecord {
                    attribute: class_attribute.to_string(),
                })?;
            per_value[value].add(label);
        }
        Ok(per_value)
    }
}

/// Binary class entropy of `records` in bits; zero when empty or pure.
pub fn class_entropy(records: &RecordSet<'_>) -> Result<f64, ClassifierError> {
    Ok(records.class_counts()?.entropy())
}

/// Entropy of `parent` minus the size-weighted entropy of its partitions.
pub fn gain_from_counts(parent: &ClassCounts, partitions: &[ClassCounts]) -> f64 {
    let total = parent.total();
    if total == 0 {
        return 0.0;
    }
    let weighted: f64 = partitions
        .iter()
        .map(|p| (p.total() as f64 / total as f64) * p.entropy())
        .sum();
    parent.entropy() - weighted
}

pub fn information_gain(records: &RecordSet<'_>, attribute: usize) -> Result<f64, ClassifierError> {
    let per_value = records.value_class_counts(attribute)?;
    Ok(gain_from_counts(&records.class_counts()?, &per_value))
}

/// Split information reported for an empty record set.
pub const EMPTY_SPLIT_INFORMATION: f64 = -1.0;

/// Split information from partition sizes.
///
/// [`SplitInformation::Product`] multiplies the per-value terms starting
/// from 1, with an empty partition contributing a factor of 1.
/// [`SplitInformation::Additive`] is the textbook sum, with an empty
/// partition contributing 0. Without any records the result is
/// [`EMPTY_SPLIT_INFORMATION`].
pub fn split_information_from_sizes(sizes: &[usize], form: SplitInformation) -> f64 {
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return EMPTY_SPLIT_INFORMATION;
    }
    match form {
        SplitInformation::Product => sizes
            .iter()
            .map(|&n| if n == 0 { 1.0 } else { entropy_term(n, total) })
            .product(),
        SplitInformation::Additive => sizes.iter().map(|&n| entropy_term(n, total)).sum(),
    }
}

pub fn split_information(
    records: &RecordSet<'_>,
    attribute: usize,
    form: SplitInformation,
) -> Result<f64, ClassifierError> {
    let sizes: Vec<usize> = records
        .value_class_counts(attribute)?
        .iter()
        .map(ClassCounts::total)
        .collect();
    Ok(split_information_from_sizes(&sizes, form))
}

/// `gain / split_info`. The ratio is undefined for `attribute` unless the
/// split information is positive and finite, which also rules out
/// [`EMPTY_SPLIT_INFORMATION`].
pub fn gain_ratio(gain: f64, split_info: f64, attribute: &str) -> Result<f64, ClassifierError> {
    if split_info <= 0.0 || !split_info.is_finite() {
        return Err(ClassifierError::UndefinedGainRatio {
            attribute: attribute.to_string(),
        });
    }
    Ok(gain / split_info)
}

/// Mean information gain of `attributes` over `records`. Zero when there
/// are no attributes or no attribute has any gain.
pub fn average_information_gain(
    records: &RecordSet<'_>,
    attributes: &[usize],
) -> Result<f64, ClassifierError> {
    if attributes.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for &attribute in attributes {
        total += information_gain(records, attribute)?;
    }
    if total == 0.0 {
        return Ok(0.0);
    }
    Ok(total / attributes.len() as f64)
}
