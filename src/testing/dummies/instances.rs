use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

pub fn instance(header: &Arc<InstanceHeader>, labels: &[&str]) -> DenseInstance {
    DenseInstance::from_labels(Arc::clone(header), labels).expect("valid test record")
}

pub fn dataset(header: &Arc<InstanceHeader>, rows: &[&[&str]]) -> Dataset {
    let instances = rows.iter().map(|row| instance(header, row)).collect();
    Dataset::with_instances(Arc::clone(header), instances).expect("records share the header")
}
