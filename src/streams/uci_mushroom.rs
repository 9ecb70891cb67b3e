use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::core::mushroom;
use crate::streams::data_lines::DataLines;
use crate::streams::stream::Stream;
use crate::utils::file_parsing::split_csv_preserving_quotes;
use std::fs::File;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stream over `agaricus-lepiota.data`: comma-separated single-letter codes,
/// class first, no header line.
pub struct MushroomCsvStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    rows: DataLines,
}

impl MushroomCsvStream {
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let header = mushroom::header().map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let rows = DataLines::new(File::open(&path)?, 0, 1)?;
        Ok(Self { path, header, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Stream for MushroomCsvStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.rows.has_next()
    }

    fn next_instance(&mut self) -> Option<Result<DenseInstance, Error>> {
        let row = self.rows.next_row()?;
        Some(row.and_then(|(line_number, line)| {
            let codes = split_csv_preserving_quotes(&line);
            DenseInstance::from_labels(Arc::clone(&self.header), codes.as_slice()).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("{}:{line_number}: {e}", self.path.display()),
                )
            })
        }))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rows.reopen(File::open(&self.path)?, 1)
    }
}
