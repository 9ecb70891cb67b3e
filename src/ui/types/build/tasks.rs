use crate::evaluation::ReportFormat;
use crate::tasks::{HoldoutEvaluator, HoldoutSplit};
use crate::ui::types::build::learners::build_learner;
use crate::ui::types::build::{BuildError, build_dataset};
use crate::ui::types::choices::TaskChoice;
use std::path::PathBuf;

/// Everything a configured task needs at run time: one evaluator per
/// learner, all over the same records and split.
pub struct HoldoutRun {
    pub evaluators: Vec<HoldoutEvaluator>,
    pub report_path: Option<PathBuf>,
    pub report_format: ReportFormat,
}

pub fn build_task(choice: TaskChoice) -> Result<HoldoutRun, BuildError> {
    let TaskChoice::EvaluateHoldout(p) = choice;
    if p.learners.is_empty() {
        return Err(BuildError::InvalidParameter(
            "at least one learner is required".into(),
        ));
    }

    let split = HoldoutSplit::from(p.split);
    split.validate()?;
    let dataset = build_dataset(p.dataset)?;

    let evaluators = p
        .learners
        .into_iter()
        .map(|choice| {
            let built = build_learner(choice, dataset.header())?;
            let evaluator = HoldoutEvaluator::new(built.learner, built.name, dataset.clone(), split)?
                .with_pr_summary(p.show_pr_summary);
            Ok(evaluator)
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    Ok(HoldoutRun {
        evaluators,
        report_path: p.report_path,
        report_format: p.report_format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{
        ArffParameters, DatasetChoice, HoldoutParameters, Id3Parameters, KnnParameters,
        LearnerChoice, RandomParameters, SplitChoice, UciMushroomParameters,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn uci_file() -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        let rows = [
            "p,x,s,n,t,p,f,c,n,k,e,e,s,s,w,w,p,w,o,p,k,s,u",
            "e,x,s,y,t,a,f,c,b,k,e,c,s,s,w,w,p,w,o,p,n,n,g",
            "e,b,s,w,t,l,f,c,b,n,e,c,s,s,w,w,p,w,o,p,n,n,m",
            "p,x,y,w,t,p,f,c,n,n,e,e,s,s,w,w,p,w,o,p,k,s,u",
        ];
        for r in rows {
            writeln!(tf, "{r}").unwrap();
        }
        tf
    }

    fn params(dataset: DatasetChoice, learners: Vec<LearnerChoice>) -> HoldoutParameters {
        HoldoutParameters {
            learners,
            dataset,
            split: SplitChoice::Random(RandomParameters {
                test_fraction: 0.5,
                seed: 3,
            }),
            show_pr_summary: false,
            report_path: None,
            report_format: ReportFormat::Json,
        }
    }

    #[test]
    fn one_evaluator_per_learner() {
        let tf = uci_file();
        let dataset = DatasetChoice::UciMushroom(UciMushroomParameters {
            path: tf.path().to_path_buf(),
        });
        let learners = vec![
            LearnerChoice::Id3(Id3Parameters::default()),
            LearnerChoice::Knn(KnnParameters::default()),
        ];
        let run = build_task(TaskChoice::EvaluateHoldout(params(dataset, learners))).unwrap();
        assert_eq!(run.evaluators.len(), 2);
        assert_eq!(run.evaluators[0].dataset().len(), 4);
        assert_eq!(run.report_format, ReportFormat::Json);
    }

    #[test]
    fn no_learners_is_invalid() {
        let dataset = DatasetChoice::UciMushroom(UciMushroomParameters::default());
        let r = build_task(TaskChoice::EvaluateHoldout(params(dataset, vec![])));
        assert!(matches!(r, Err(BuildError::InvalidParameter(_))));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dataset = DatasetChoice::ArffFile(ArffParameters {
            path: PathBuf::from("/no/such/mushrooms.arff"),
            class_index: 0,
        });
        let learners = vec![LearnerChoice::Id3(Id3Parameters::default())];
        let r = build_task(TaskChoice::EvaluateHoldout(params(dataset, learners)));
        assert!(matches!(r, Err(BuildError::Open { .. })));
        assert!(r.err().unwrap().to_string().contains("mushrooms.arff"));
    }
}
