use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

fn nominal(name: &str, values: &[&str]) -> AttributeRef {
    Arc::new(NominalAttribute::with_values(name, values).expect("valid test attribute"))
}

/// One binary input `A ∈ {x, y}` followed by the class `{e, p}`.
pub fn binary_header() -> Arc<InstanceHeader> {
    Arc::new(
        InstanceHeader::new(
            "bin".into(),
            vec![nominal("A", &["x", "y"]), nominal("class", &["e", "p"])],
            1,
        )
        .expect("valid test header"),
    )
}

/// `odor ∈ {a, f, n}`, `cap-surface ∈ {s, y}` and the class `{e, p}` last.
pub fn toy_mushroom_header() -> Arc<InstanceHeader> {
    Arc::new(
        InstanceHeader::new(
            "toy-mushroom".into(),
            vec![
                nominal("odor", &["a", "f", "n"]),
                nominal("cap-surface", &["s", "y"]),
                nominal("class", &["e", "p"]),
            ],
            2,
        )
        .expect("valid test header"),
    )
}
