use crate::tasks::HoldoutSplit;
use crate::ui::types::choices::SplitChoice;

impl From<SplitChoice> for HoldoutSplit {
    fn from(choice: SplitChoice) -> Self {
        match choice {
            SplitChoice::Interleaved(p) => HoldoutSplit::Interleaved {
                test_head: p.test_head,
                train_start: p.train_start,
                train_step: p.train_step,
            },
            SplitChoice::Random(p) => HoldoutSplit::Random {
                test_fraction: p.test_fraction,
                seed: p.seed,
            },
        }
    }
}
