use crate::classifiers::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::LearnerChoice;

mod decision_tree;
mod knn;

/// A runtime learner together with the label its reports carry.
pub struct BuiltLearner {
    pub name: String,
    pub learner: Box<dyn Classifier>,
}

pub fn build_learner(
    choice: LearnerChoice,
    header: &InstanceHeader,
) -> Result<BuiltLearner, BuildError> {
    let name = choice.label();
    let learner: Box<dyn Classifier> = match choice {
        LearnerChoice::Id3(p) => Box::new(decision_tree::id3(p, header)?),
        LearnerChoice::C45(p) => Box::new(decision_tree::c45(p, header)?),
        LearnerChoice::Knn(p) => Box::new(knn::knn(p, header)?),
    };
    Ok(BuiltLearner { name, learner })
}

/// Maps attribute names to indices; `None` means every input attribute.
fn resolve_attributes(
    names: Option<Vec<String>>,
    header: &InstanceHeader,
) -> Result<Vec<usize>, BuildError> {
    let Some(names) = names else {
        return Ok(header.input_attribute_indices());
    };
    names
        .into_iter()
        .map(|name| match header.index_of_attribute(&name) {
            Some(i) if header.is_input_attribute(i) => Ok(i),
            Some(_) => Err(BuildError::InvalidParameter(format!(
                "'{name}' is the class attribute"
            ))),
            None => Err(BuildError::UnknownAttribute(name)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::toy_mushroom_header;
    use crate::ui::types::choices::{C45Parameters, Id3Parameters, KnnParameters};

    #[test]
    fn attribute_names_resolve_in_given_order() {
        let header = toy_mushroom_header();
        let idx =
            resolve_attributes(Some(vec!["cap-surface".into(), "odor".into()]), &header).unwrap();
        assert_eq!(idx, vec![1, 0]);
        assert_eq!(resolve_attributes(None, &header).unwrap(), vec![0, 1]);
    }

    #[test]
    fn bad_attribute_names_fail() {
        let header = toy_mushroom_header();
        assert!(matches!(
            resolve_attributes(Some(vec!["gill-size".into()]), &header),
            Err(BuildError::UnknownAttribute(n)) if n == "gill-size"
        ));
        assert!(matches!(
            resolve_attributes(Some(vec!["class".into()]), &header),
            Err(BuildError::InvalidParameter(_))
        ));
    }

    #[test]
    fn builds_every_learner_kind() {
        let header = toy_mushroom_header();
        for choice in [
            LearnerChoice::Id3(Id3Parameters::default()),
            LearnerChoice::C45(C45Parameters::default()),
            LearnerChoice::Knn(KnnParameters::default()),
        ] {
            let label = choice.label();
            let built = build_learner(choice, &header).unwrap();
            assert_eq!(built.name, label);
            assert!(!built.learner.is_trained());
        }
    }

    #[test]
    fn zero_neighbours_is_rejected() {
        let header = toy_mushroom_header();
        let choice = LearnerChoice::Knn(KnnParameters {
            k: 0,
            attributes: None,
        });
        assert!(matches!(
            build_learner(choice, &header),
            Err(BuildError::Classifier(_))
        ));
    }
}
