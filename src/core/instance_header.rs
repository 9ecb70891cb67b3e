use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::class_label::ClassLabel;
use crate::core::error::SchemaError;
use std::collections::HashSet;
use std::str::FromStr;

/// Attribute registry shared by every record of a dataset.
///
/// Maps each attribute position to its nominal domain and marks which
/// attribute carries the class. The class domain is validated once here, so
/// the rest of the crate can translate class value indices into
/// [`ClassLabel`]s without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<AttributeRef>,
    class_index: usize,
    class_labels: Vec<ClassLabel>,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> Result<InstanceHeader, SchemaError> {
        if class_index >= attributes.len() {
            return Err(SchemaError::ClassIndexOutOfRange {
                class_index,
                number_of_attributes: attributes.len(),
            });
        }

        let mut seen = HashSet::with_capacity(attributes.len());
        for attr in &attributes {
            if !seen.insert(attr.name()) {
                return Err(SchemaError::DuplicateAttribute {
                    attribute: attr.name().to_string(),
                });
            }
        }

        let class_attribute = &attributes[class_index];
        let class_labels = class_attribute
            .values()
            .iter()
            .map(|v| ClassLabel::from_str(v).ok())
            .collect::<Option<Vec<_>>>()
            .filter(|labels| {
                labels.len() == 2
                    && labels.contains(&ClassLabel::Edible)
                    && labels.contains(&ClassLabel::Poisonous)
            })
            .ok_or_else(|| SchemaError::NonBinaryClass {
                attribute: class_attribute.name().to_string(),
                values: class_attribute.values().to_vec(),
            })?;

        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
            class_labels,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_labels.len()
    }

    /// Indices of every attribute except the class, in declaration order.
    pub fn input_attribute_indices(&self) -> Vec<usize> {
        (0..self.attributes.len())
            .filter(|&i| i != self.class_index)
            .collect()
    }

    pub fn is_input_attribute(&self, index: usize) -> bool {
        index < self.attributes.len() && index != self.class_index
    }

    pub fn class_label_for_value(&self, value: usize) -> Option<ClassLabel> {
        self.class_labels.get(value).copied()
    }

    pub fn class_value_for_label(&self, label: ClassLabel) -> usize {
        self.class_labels
            .iter()
            .position(|&l| l == label)
            .unwrap_or(label.index())
    }

    /// Name of the attribute at `index`, or a placeholder for diagnostics.
    pub fn attribute_name(&self, index: usize) -> String {
        self.attribute_at_index(index)
            .map(|a| a.name().to_string())
            .unwrap_or_else(|| format!("#{index}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn attr(name: &str, values: &[&str]) -> AttributeRef {
        Arc::new(NominalAttribute::with_values(name, values).unwrap())
    }

    #[test]
    fn class_domain_maps_onto_labels_in_declared_order() {
        let header = InstanceHeader::new(
            "mushroom".into(),
            vec![attr("class", &["p", "e"]), attr("odor", &["a", "n"])],
            0,
        )
        .unwrap();

        assert_eq!(header.class_label_for_value(0), Some(ClassLabel::Poisonous));
        assert_eq!(header.class_label_for_value(1), Some(ClassLabel::Edible));
        assert_eq!(header.class_value_for_label(ClassLabel::Edible), 1);
        assert_eq!(header.input_attribute_indices(), vec![1]);
        assert_eq!(header.index_of_attribute("odor"), Some(1));
        assert_eq!(header.number_of_classes(), 2);
        assert!(header.is_input_attribute(1));
        assert!(!header.is_input_attribute(0));
    }

    #[test]
    fn rejects_non_binary_class() {
        let err = InstanceHeader::new(
            "r".into(),
            vec![attr("a", &["x"]), attr("class", &["edible", "poisonous", "unknown"])],
            1,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::NonBinaryClass { .. }));

        let err = InstanceHeader::new(
            "r".into(),
            vec![attr("class", &["edible", "edible-ish"])],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::NonBinaryClass { .. }));
    }

    #[test]
    fn rejects_bad_class_index_and_duplicate_names() {
        let err = InstanceHeader::new("r".into(), vec![attr("class", &["e", "p"])], 3).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ClassIndexOutOfRange {
                class_index: 3,
                number_of_attributes: 1
            }
        );

        let err = InstanceHeader::new(
            "r".into(),
            vec![attr("a", &["x"]), attr("a", &["y"]), attr("class", &["e", "p"])],
            2,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateAttribute {
                attribute: "a".into()
            }
        );
    }
}
