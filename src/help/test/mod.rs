
use crate::{help::HelpPaginator, model::help::HelpEntry};

pub(super) const TITLE: &str = ":grey_question: BGSBot Help";

/// Paginator with `count` entries named `cmd0`, `cmd1`, ...
pub(super) fn paginator(count: usize) -> HelpPaginator {
    let mut paginator = HelpPaginator::new(TITLE, "BGSBot");
    for index in 0..count {
        paginator.add_help(HelpEntry::new(
            format!("cmd{}", index),
            format!("Does thing {}", index),
            format!("cmd{} <arg>", index),
            vec![format!("cmd{} a", index)],
        ));
    }
    paginator
}
