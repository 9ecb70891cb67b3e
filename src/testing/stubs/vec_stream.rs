use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::streams::Stream;
use std::io::{Error, ErrorKind};
use std::sync::Arc;

/// In-memory stream over label rows. Rows that do not fit the header are
/// reported as `InvalidData` when reached.
pub struct VecStream {
    header: Arc<InstanceHeader>,
    rows: Vec<Vec<String>>,
    idx: usize,
}

impl VecStream {
    pub fn from_rows(header: Arc<InstanceHeader>, rows: &[&[&str]]) -> Self {
        Self {
            header,
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Result<DenseInstance, Error>> {
        if !self.has_more_instances() {
            return None;
        }

        let row = &self.rows[self.idx];
        self.idx += 1;
        Some(
            DenseInstance::from_labels(Arc::clone(&self.header), row.as_slice())
                .map_err(|e| Error::new(ErrorKind::InvalidData, e)),
        )
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
