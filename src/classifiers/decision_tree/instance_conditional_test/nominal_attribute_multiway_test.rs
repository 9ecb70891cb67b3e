use crate::classifiers::decision_tree::instance_conditional_test::InstanceConditionalTest;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;

/// One branch per value of a nominal attribute; branch `i` is value `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttributeMultiwayTest {
    attribute_index: usize,
    number_of_values: usize,
}

impl NominalAttributeMultiwayTest {
    pub fn new(attribute_index: usize, number_of_values: usize) -> Self {
        Self {
            attribute_index,
            number_of_values,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }
}

impl InstanceConditionalTest for NominalAttributeMultiwayTest {
    fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize> {
        instance.value_at_index(self.attribute_index)
    }

    fn max_branches(&self) -> usize {
        self.number_of_values
    }

    fn get_atts_test_depends_on(&self) -> Vec<usize> {
        vec![self.attribute_index]
    }

    fn describe_condition_for_branch(&self, branch: usize, header: &InstanceHeader) -> String {
        let name = header.attribute_name(self.attribute_index);
        match header
            .attribute_at_index(self.attribute_index)
            .and_then(|a| a.value(branch))
        {
            Some(value) => format!("{name} = {value}"),
            None => format!("{name} = #{branch}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{instance, toy_mushroom_header};

    #[test]
    fn routes_by_value_index() {
        let header = toy_mushroom_header();
        let test = NominalAttributeMultiwayTest::new(0, 3);

        assert_eq!(test.branch_for_instance(&instance(&header, &["n", "s", "e"])), Some(2));
        assert!(!test.result_known_for_instance(&instance(&header, &["?", "s", "e"])));
        assert_eq!(test.max_branches(), 3);
        assert_eq!(test.get_atts_test_depends_on(), vec![0]);
        assert_eq!(test.describe_condition_for_branch(1, &header), "odor = f");
    }
}
