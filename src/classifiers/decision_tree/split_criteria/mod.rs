pub mod gain_ratio_split_criterion;
pub mod info_gain_split_criterion;
pub mod split_criterion;

pub use gain_ratio_split_criterion::GainRatioSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;
