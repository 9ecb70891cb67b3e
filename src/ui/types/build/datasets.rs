use crate::core::dataset::Dataset;
use crate::streams::Stream;
use crate::streams::arff::ArffFileStream;
use crate::streams::uci_mushroom::MushroomCsvStream;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::DatasetChoice;
use tracing::info;

pub fn build_stream(choice: DatasetChoice) -> Result<Box<dyn Stream>, BuildError> {
    match choice {
        DatasetChoice::ArffFile(p) => {
            let s = ArffFileStream::new(p.path.clone(), p.class_index)
                .map_err(|source| BuildError::Open { path: p.path, source })?;
            Ok(Box::new(s))
        }
        DatasetChoice::UciMushroom(p) => {
            let s = MushroomCsvStream::new(p.path.clone())
                .map_err(|source| BuildError::Open { path: p.path, source })?;
            Ok(Box::new(s))
        }
    }
}

/// Opens the configured source and reads every record into memory.
pub fn build_dataset(choice: DatasetChoice) -> Result<Dataset, BuildError> {
    let mut stream = build_stream(choice)?;
    let dataset = Dataset::from_stream(stream.as_mut())?;
    info!(
        relation = dataset.header().relation_name(),
        records = dataset.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
