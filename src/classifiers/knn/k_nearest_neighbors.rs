use crate::classifiers::classifier::Classifier;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::{ClassCounts, ClassLabel};
use crate::core::dataset::Dataset;
use crate::core::instances::Instance;
use tracing::debug;

/// Majority vote among the `k` training records closest in Hamming terms.
///
/// The distance between two records is the square root of the number of
/// compared attributes on which they differ. Equal distances keep training
/// order. Edible needs a strict majority of the neighbours.
#[derive(Debug, Clone)]
pub struct KNearestNeighbors {
    k: usize,
    attributes: Option<Vec<usize>>,
    training: Option<Dataset>,
    labels: Vec<ClassLabel>,
}

impl KNearestNeighbors {
    pub fn new(k: usize) -> Result<Self, ClassifierError> {
        if k == 0 {
            return Err(ClassifierError::InvalidParameter(
                "k must be at least 1".into(),
            ));
        }
        Ok(Self {
            k,
            attributes: None,
            training: None,
            labels: Vec::new(),
        })
    }

    /// Restricts the compared attributes. By default every input attribute
    /// of the training header is compared.
    pub fn with_attributes(mut self, attributes: Vec<usize>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    fn compared_attributes(&self, dataset: &Dataset) -> Vec<usize> {
        match &self.attributes {
            Some(attributes) => attributes.clone(),
            None => dataset.header().input_attribute_indices(),
        }
    }

    pub fn distance(
        a: &dyn Instance,
        b: &dyn Instance,
        attributes: &[usize],
    ) -> Result<f64, ClassifierError> {
        let mut mismatches = 0usize;
        for &attribute in attributes {
            let missing = || ClassifierError::IncompleteRecord {
                attribute: a.header().attribute_name(attribute),
            };
            let left = a.value_at_index(attribute).ok_or_else(missing)?;
            let right = b.value_at_index(attribute).ok_or_else(missing)?;
            if left != right {
                mismatches += 1;
            }
        }
        Ok((mismatches as f64).sqrt())
    }

    /// Indices of the `k` nearest training records, closest first.
    fn nearest(
        &self,
        training: &Dataset,
        instance: &dyn Instance,
        exclude: Option<usize>,
    ) -> Result<Vec<usize>, ClassifierError> {
        let attributes = self.compared_attributes(training);
        let mut distances = Vec::with_capacity(training.len());
        for (i, record) in training.iter().enumerate() {
            if exclude == Some(i) {
                continue;
            }
            distances.push((Self::distance(instance, record, &attributes)?, i));
        }
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(distances.into_iter().take(self.k).map(|(_, i)| i).collect())
    }

    fn vote(&self, neighbours: &[usize]) -> ClassLabel {
        let mut counts = ClassCounts::default();
        for &i in neighbours {
            counts.add(self.labels[i]);
        }
        if counts.edible > neighbours.len() / 2 {
            ClassLabel::Edible
        } else {
            ClassLabel::Poisonous
        }
    }

    /// Relabels every training record from its `k` nearest other training
    /// records.
    pub fn leave_one_out(&self) -> Result<Vec<ClassLabel>, ClassifierError> {
        let training = self.training.as_ref().ok_or(ClassifierError::NotTrained)?;
        let mut out = Vec::with_capacity(training.len());
        for (i, record) in training.iter().enumerate() {
            let neighbours = self.nearest(training, record, Some(i))?;
            out.push(self.vote(&neighbours));
        }
        debug!(records = out.len(), k = self.k, "leave-one-out pass done");
        Ok(out)
    }

    pub fn training_set(&self) -> Option<&Dataset> {
        self.training.as_ref()
    }
}

impl Classifier for KNearestNeighbors {
    fn train_on_dataset(&mut self, dataset: &Dataset) -> Result<(), ClassifierError> {
        if dataset.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        if let Some(attributes) = &self.attributes {
            if let Some(&index) = attributes
                .iter()
                .find(|&&i| !dataset.header().is_input_attribute(i))
            {
                return Err(ClassifierError::UnknownAttribute { index });
            }
        }
        let class_name = dataset.header().class_attribute().name().to_string();
        self.labels = dataset
            .iter()
            .map(|r| {
                r.class_label().ok_or_else(|| ClassifierError::IncompleteRecord {
                    attribute: class_name.clone(),
                })
            })
            .collect::<Result<_, _>>()?;
        self.training = Some(dataset.clone());
        Ok(())
    }

    fn predict(&self, instance: &dyn Instance) -> Result<ClassLabel, ClassifierError> {
        let training = self.training.as_ref().ok_or(ClassifierError::NotTrained)?;
        if *instance.header() != **training.header() {
            return Err(ClassifierError::HeaderMismatch);
        }
        let neighbours = self.nearest(training, instance, None)?;
        Ok(self.vote(&neighbours))
    }

    fn is_trained(&self) -> bool {
        self.training.is_some()
    }

    fn relabel_training_set(&self) -> Result<Option<Vec<ClassLabel>>, ClassifierError> {
        self.leave_one_out().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{dataset, instance, toy_mushroom_header};

    #[test]
    fn distance_is_root_of_mismatch_count() {
        let header = toy_mushroom_header();
        let a = instance(&header, &["a", "s", "e"]);
        let b = instance(&header, &["f", "y", "p"]);
        let c = instance(&header, &["a", "y", "p"]);
        let attrs = header.input_attribute_indices();

        assert_eq!(KNearestNeighbors::distance(&a, &a, &attrs).unwrap(), 0.0);
        assert_eq!(KNearestNeighbors::distance(&a, &c, &attrs).unwrap(), 1.0);
        assert!((KNearestNeighbors::distance(&a, &b, &attrs).unwrap() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn nearest_neighbours_vote() {
        let header = toy_mushroom_header();
        let ds = dataset(
            &header,
            &[
                &["a", "s", "e"],
                &["a", "y", "e"],
                &["f", "y", "p"],
                &["f", "s", "p"],
                &["n", "y", "p"],
            ],
        );
        let mut knn = KNearestNeighbors::new(3).unwrap();
        knn.train_on_dataset(&ds).unwrap();

        // two edible records at distances 0 and 1 outvote f s p at distance 1
        assert_eq!(
            knn.predict(&instance(&header, &["a", "s", "p"])).unwrap(),
            ClassLabel::Edible
        );
        assert_eq!(
            knn.predict(&instance(&header, &["f", "y", "e"])).unwrap(),
            ClassLabel::Poisonous
        );
    }

    #[test]
    fn edible_needs_a_strict_majority() {
        let header = toy_mushroom_header();
        let ds = dataset(&header, &[&["a", "s", "e"], &["a", "s", "p"]]);
        let mut knn = KNearestNeighbors::new(2).unwrap();
        knn.train_on_dataset(&ds).unwrap();
        assert_eq!(
            knn.predict(&instance(&header, &["a", "s", "e"])).unwrap(),
            ClassLabel::Poisonous
        );
    }

    #[test]
    fn leave_one_out_skips_the_record_itself() {
        let header = toy_mushroom_header();
        let ds = dataset(
            &header,
            &[&["a", "s", "p"], &["a", "s", "e"], &["a", "s", "e"]],
        );
        let mut knn = KNearestNeighbors::new(1).unwrap();
        knn.train_on_dataset(&ds).unwrap();
        assert_eq!(
            knn.leave_one_out().unwrap(),
            vec![ClassLabel::Edible, ClassLabel::Poisonous, ClassLabel::Poisonous]
        );
    }

    #[test]
    fn rejects_misuse() {
        assert!(matches!(
            KNearestNeighbors::new(0).unwrap_err(),
            ClassifierError::InvalidParameter(_)
        ));

        let header = toy_mushroom_header();
        let knn = KNearestNeighbors::new(1).unwrap();
        assert_eq!(
            knn.predict(&instance(&header, &["a", "s", "e"])).unwrap_err(),
            ClassifierError::NotTrained
        );
        assert_eq!(knn.leave_one_out().unwrap_err(), ClassifierError::NotTrained);

        let mut knn = KNearestNeighbors::new(1).unwrap();
        knn.train_on_dataset(&dataset(&header, &[&["a", "s", "e"]])).unwrap();
        assert!(matches!(
            knn.predict(&instance(&header, &["?", "s", "e"])).unwrap_err(),
            ClassifierError::IncompleteRecord { .. }
        ));
        assert_eq!(
            KNearestNeighbors::new(1)
                .unwrap()
                .train_on_dataset(&dataset(&header, &[]))
                .unwrap_err(),
            ClassifierError::EmptyDataset
        );
    }
}
