use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::Debug;

/// Routing rule of an internal node.
pub trait InstanceConditionalTest: Debug + Send + Sync {
    /// Branch the record follows, `None` when the tested value is missing.
    fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize>;

    fn result_known_for_instance(&self, instance: &dyn Instance) -> bool {
        self.branch_for_instance(instance).is_some()
    }

    fn max_branches(&self) -> usize;

    fn get_atts_test_depends_on(&self) -> Vec<usize>;

    /// Human-readable condition of `branch`, e.g. `odor = a`.
    fn describe_condition_for_branch(&self, branch: usize, header: &InstanceHeader) -> String;
}
