use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::io::Error;
use std::sync::Arc;

/// Pull-based interface for finite record sources.
///
/// Every record produced by a stream shares the same immutable
/// [`InstanceHeader`] for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name, attributes, class index).
    ///
    /// The header must not change across [`restart`](Stream::restart) calls.
    fn header(&self) -> &Arc<InstanceHeader>;

    /// Indicates whether the stream *may* produce more records.
    ///
    /// If it returns `false`, a subsequent call to
    /// [`next_instance`](Stream::next_instance) must return `None`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next record, `None` once the stream is exhausted.
    ///
    /// Malformed rows surface as `Some(Err(_))` with
    /// [`std::io::ErrorKind::InvalidData`]; the stream is not advanced past
    /// them silently.
    fn next_instance(&mut self) -> Option<Result<DenseInstance, Error>>;

    /// Resets the stream to its first record.
    ///
    /// Returns an error if the underlying source cannot be reopened or sought.
    fn restart(&mut self) -> Result<(), Error>;
}
