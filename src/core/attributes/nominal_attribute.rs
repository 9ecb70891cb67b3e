use crate::core::error::SchemaError;
use std::collections::HashMap;
use std::sync::Arc;

pub type AttributeRef = Arc<NominalAttribute>;

/// A categorical attribute with a finite, ordered domain of value labels.
///
/// Records refer to values by their position in `values`, so the order of
/// the domain is part of the schema and is also the order in which a split
/// node enumerates its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttribute {
    name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String, values: Vec<String>) -> Result<NominalAttribute, SchemaError> {
        if values.is_empty() {
            return Err(SchemaError::EmptyDomain { attribute: name });
        }

        let mut label_to_index = HashMap::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            if label_to_index.insert(value.clone(), index).is_some() {
                return Err(SchemaError::DuplicateValue {
                    attribute: name,
                    value: value.clone(),
                });
            }
        }

        Ok(NominalAttribute {
            name,
            values,
            label_to_index,
        })
    }

    pub fn with_values<S: AsRef<str>>(
        name: &str,
        values: &[S],
    ) -> Result<NominalAttribute, SchemaError> {
        Self::new(
            name.to_string(),
            values.iter().map(|v| v.as_ref().to_string()).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }

    pub fn arff_representation(&self) -> String {
        format!("@attribute {} {{{}}}", self.name, self.values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_indexed_in_declaration_order() {
        let attr = NominalAttribute::with_values("odor", &["a", "l", "n"]).unwrap();
        assert_eq!(attr.number_of_values(), 3);
        assert_eq!(attr.index_of_value("l"), Some(1));
        assert_eq!(attr.value(2), Some("n"));
        assert_eq!(attr.value(3), None);
        assert_eq!(attr.index_of_value("x"), None);
    }

    #[test]
    fn empty_and_duplicate_domains_are_rejected() {
        let err = NominalAttribute::with_values::<&str>("empty", &[]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::EmptyDomain {
                attribute: "empty".into()
            }
        );

        let err = NominalAttribute::with_values("dup", &["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateValue {
                attribute: "dup".into(),
                value: "a".into()
            }
        );
    }

    #[test]
    fn arff_representation_lists_domain() {
        let attr = NominalAttribute::with_values("gill-size", &["b", "n"]).unwrap();
        assert_eq!(attr.arff_representation(), "@attribute gill-size {b,n}");
    }
}
