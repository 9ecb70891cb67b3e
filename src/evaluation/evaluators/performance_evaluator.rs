use crate::core::class_label::ClassLabel;
use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates predictions against ground truth.
///
/// A `PerformanceEvaluator` consumes labelled records together with the
/// label predicted for them and exposes aggregated metrics via
/// [`performance`](PerformanceEvaluator::performance).
pub trait PerformanceEvaluator {
    /// Clears accumulated results.
    fn reset(&mut self);

    /// Feeds one record and the label predicted for it. Records without a
    /// class value are not counted.
    fn add_result(&mut self, example: &dyn Instance, prediction: ClassLabel);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
