use crate::core::attributes::NominalAttribute;
use crate::core::class_label::ClassLabel;
use crate::core::instance_header::InstanceHeader;

/// A record: one value index (or "missing") per attribute of its header.
pub trait Instance {
    fn header(&self) -> &InstanceHeader;

    /// Value index at `index`. `None` when the value is missing or the index
    /// is outside the header.
    fn value_at_index(&self, index: usize) -> Option<usize>;

    fn is_missing_at_index(&self, index: usize) -> bool {
        self.value_at_index(index).is_none()
    }

    fn number_of_attributes(&self) -> usize {
        self.header().number_of_attributes()
    }

    fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.header().attribute_at_index(index)
    }

    fn class_index(&self) -> usize {
        self.header().class_index()
    }

    fn class_value(&self) -> Option<usize> {
        self.value_at_index(self.class_index())
    }

    fn is_class_missing(&self) -> bool {
        self.class_value().is_none()
    }

    fn class_label(&self) -> Option<ClassLabel> {
        self.class_value()
            .and_then(|v| self.header().class_label_for_value(v))
    }

    /// Label of the value at `index`, if present.
    fn label_at_index(&self, index: usize) -> Option<&str> {
        let value = self.value_at_index(index)?;
        self.attribute_at_index(index)?.value(value)
    }

    fn to_vec(&self) -> Vec<Option<usize>>;
}
