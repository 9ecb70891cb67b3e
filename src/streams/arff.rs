use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::streams::data_lines::DataLines;
use crate::streams::stream::Stream;
use crate::utils::file_parsing::{
    ArffAttributeType, parse_attribute_declaration, split_csv_preserving_quotes, strip_comment,
    strip_surrounding_quotes,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stream over the data section of an ARFF file whose attributes are all
/// nominal.
pub struct ArffFileStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    rows: DataLines,
    data_line_number: usize,
}

impl ArffFileStream {
    pub fn new(path: PathBuf, class_index: usize) -> Result<Self, Error> {
        let file = File::open(&path)?;
        let (header, data_start, data_line_number) = read_header(&path, file, class_index)?;
        let rows = DataLines::new(File::open(&path)?, data_start, data_line_number)?;
        Ok(Self {
            path,
            header: Arc::new(header),
            rows,
            data_line_number,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn invalid(path: &Path, line: usize, msg: impl std::fmt::Display) -> Error {
    Error::new(
        ErrorKind::InvalidData,
        format!("{}:{line}: {msg}", path.display()),
    )
}

/// Reads up to and including `@data`. Returns the header, the byte offset
/// of the first data line and its line number.
fn read_header(
    path: &Path,
    file: File,
    class_index: usize,
) -> Result<(InstanceHeader, u64, usize), Error> {
    let mut reader = BufReader::new(file);
    let mut relation = None;
    let mut attributes: Vec<AttributeRef> = Vec::new();
    let mut offset = 0u64;
    let mut line_number = 0usize;
    let mut buf = String::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            return Err(invalid(path, line_number, "missing @data section"));
        }
        offset += read as u64;
        line_number += 1;

        let line = strip_comment(&buf).trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_ascii_lowercase();

        if lower.starts_with("@relation") {
            relation = Some(strip_surrounding_quotes(line[9..].trim()).to_string());
        } else if lower.starts_with("@attribute") {
            let (name, ty) = parse_attribute_declaration(line)
                .ok_or_else(|| invalid(path, line_number, "malformed @attribute"))?;
            match ty {
                ArffAttributeType::Nominal(values) => {
                    let attr = NominalAttribute::new(name, values)
                        .map_err(|e| invalid(path, line_number, e))?;
                    attributes.push(Arc::new(attr));
                }
                ArffAttributeType::Other(kind) => {
                    return Err(invalid(
                        path,
                        line_number,
                        format!("attribute '{name}' is {kind}, only nominal attributes are supported"),
                    ));
                }
            }
        } else if lower.starts_with("@data") {
            break;
        } else {
            return Err(invalid(path, line_number, format!("unexpected line '{line}'")));
        }
    }

    let relation = relation.unwrap_or_default();
    let header = InstanceHeader::new(relation, attributes, class_index)
        .map_err(|e| invalid(path, line_number, e))?;
    Ok((header, offset, line_number + 1))
}

impl Stream for ArffFileStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.rows.has_next()
    }

    fn next_instance(&mut self) -> Option<Result<DenseInstance, Error>> {
        let row = self.rows.next_row()?;
        Some(row.and_then(|(line_number, line)| {
            let labels: Vec<String> = split_csv_preserving_quotes(&line)
                .iter()
                .map(|v| strip_surrounding_quotes(v).to_string())
                .collect();
            DenseInstance::from_labels(Arc::clone(&self.header), labels.as_slice())
                .map_err(|e| invalid(&self.path, line_number, e))
        }))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rows
            .reopen(File::open(&self.path)?, self.data_line_number)
    }
}
