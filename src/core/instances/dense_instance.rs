use crate::core::error::SchemaError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

/// Label used for a missing value in text sources.
pub const MISSING_LABEL: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseInstance {
    header: Arc<InstanceHeader>,
    values: Vec<Option<usize>>,
}

impl DenseInstance {
    /// Builds a record from value indices, checking arity and domain bounds.
    pub fn new(
        header: Arc<InstanceHeader>,
        values: Vec<Option<usize>>,
    ) -> Result<DenseInstance, SchemaError> {
        if values.len() != header.number_of_attributes() {
            return Err(SchemaError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: values.len(),
            });
        }
        for (attr, value) in header.attributes().iter().zip(&values) {
            if let Some(index) = *value {
                if index >= attr.number_of_values() {
                    return Err(SchemaError::ValueOutOfRange {
                        attribute: attr.name().to_string(),
                        index,
                    });
                }
            }
        }
        Ok(DenseInstance { header, values })
    }

    /// Builds a record from value labels.
    ///
    /// `?` marks a missing value, unless the attribute itself declares `?`
    /// as a domain value (the UCI `stalk-root` attribute does).
    pub fn from_labels<S: AsRef<str>>(
        header: Arc<InstanceHeader>,
        labels: &[S],
    ) -> Result<DenseInstance, SchemaError> {
        if labels.len() != header.number_of_attributes() {
            return Err(SchemaError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: labels.len(),
            });
        }

        let values = header
            .attributes()
            .iter()
            .zip(labels)
            .map(|(attr, label)| {
                let label = label.as_ref().trim();
                match attr.index_of_value(label) {
                    Some(index) => Ok(Some(index)),
                    None if label == MISSING_LABEL => Ok(None),
                    None => Err(SchemaError::UnknownValue {
                        attribute: attr.name().to_string(),
                        value: label.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DenseInstance { header, values })
    }

    pub fn header_arc(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn shares_header(&self, header: &Arc<InstanceHeader>) -> bool {
        Arc::ptr_eq(&self.header, header) || *self.header == **header
    }
}

impl Instance for DenseInstance {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn value_at_index(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied().flatten()
    }

    fn to_vec(&self) -> Vec<Option<usize>> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::class_label::ClassLabel;
    use crate::testing::dummies::headers::binary_header;

    #[test]
    fn from_labels_resolves_value_indices() {
        let header = binary_header();
        let inst = DenseInstance::from_labels(header.clone(), &["y", "e"]).unwrap();

        assert_eq!(inst.value_at_index(0), Some(1));
        assert_eq!(inst.label_at_index(0), Some("y"));
        assert_eq!(inst.class_label(), Some(ClassLabel::Edible));
        assert!(!inst.is_class_missing());
        assert_eq!(inst.to_vec(), vec![Some(1), Some(0)]);
        assert!(inst.shares_header(&header));
    }

    #[test]
    fn question_mark_is_missing_unless_declared() {
        let header = binary_header();
        let inst = DenseInstance::from_labels(header, &["?", "p"]).unwrap();
        assert!(inst.is_missing_at_index(0));
        assert_eq!(inst.class_label(), Some(ClassLabel::Poisonous));

        let header = crate::core::mushroom::header().unwrap();
        let stalk_root = header.index_of_attribute("stalk-root").unwrap();
        let mut labels: Vec<String> = header
            .attributes()
            .iter()
            .map(|a| a.values()[0].clone())
            .collect();
        labels[stalk_root] = "?".to_string();
        let inst = DenseInstance::from_labels(header, labels.as_slice()).unwrap();
        assert!(!inst.is_missing_at_index(stalk_root));
        assert_eq!(inst.label_at_index(stalk_root), Some("?"));
    }

    #[test]
    fn rejects_malformed_records() {
        let header = binary_header();
        assert_eq!(
            DenseInstance::from_labels(header.clone(), &["x"]).unwrap_err(),
            SchemaError::ArityMismatch {
                expected: 2,
                found: 1
            }
        );
        assert!(matches!(
            DenseInstance::from_labels(header.clone(), &["z", "e"]).unwrap_err(),
            SchemaError::UnknownValue { .. }
        ));
        assert!(matches!(
            DenseInstance::new(header, vec![Some(5), Some(0)]).unwrap_err(),
            SchemaError::ValueOutOfRange { index: 5, .. }
        ));
    }
}
