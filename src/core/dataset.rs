use crate::core::class_label::ClassCounts;
use crate::core::error::SchemaError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use std::io::Error;
use std::sync::Arc;

/// Ordered, in-memory sequence of records sharing one header.
///
/// Record order is preserved by every operation, since ties during tree
/// induction and neighbour search are resolved by position.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>) -> Self {
        Self {
            header,
            instances: Vec::new(),
        }
    }

    pub fn with_instances(
        header: Arc<InstanceHeader>,
        instances: Vec<DenseInstance>,
    ) -> Result<Self, SchemaError> {
        let mut dataset = Self::new(header);
        dataset.instances.reserve(instances.len());
        for inst in instances {
            dataset.push(inst)?;
        }
        Ok(dataset)
    }

    /// Drains `stream`, stopping at the first malformed record.
    pub fn from_stream(stream: &mut dyn Stream) -> Result<Self, Error> {
        let mut dataset = Self::new(Arc::clone(stream.header()));
        while let Some(next) = stream.next_instance() {
            dataset.instances.push(next?);
        }
        Ok(dataset)
    }

    pub fn push(&mut self, instance: DenseInstance) -> Result<(), SchemaError> {
        if !instance.shares_header(&self.header) {
            return Err(SchemaError::HeaderMismatch);
        }
        self.instances.push(instance);
        Ok(())
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DenseInstance> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DenseInstance> {
        self.instances.iter()
    }

    /// New dataset holding the records at `indices`, in the given order.
    /// Indices past the end are ignored.
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) -> Dataset {
        let instances = indices
            .into_iter()
            .filter_map(|i| self.instances.get(i).cloned())
            .collect();
        Dataset {
            header: Arc::clone(&self.header),
            instances,
        }
    }

    /// Class distribution; records with a missing class are not counted.
    pub fn class_counts(&self) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for label in self.instances.iter().filter_map(|i| i.class_label()) {
            counts.add(label);
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DenseInstance;
    type IntoIter = std::slice::Iter<'a, DenseInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}
