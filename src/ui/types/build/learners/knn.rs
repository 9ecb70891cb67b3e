use crate::classifiers::knn::KNearestNeighbors;
use crate::core::instance_header::InstanceHeader;
use crate::ui::types::build::BuildError;
use crate::ui::types::build::learners::resolve_attributes;
use crate::ui::types::choices::KnnParameters;

pub(super) fn knn(p: KnnParameters, header: &InstanceHeader) -> Result<KNearestNeighbors, BuildError> {
    let attributes = resolve_attributes(p.attributes, header)?;
    Ok(KNearestNeighbors::new(p.k)?.with_attributes(attributes))
}
