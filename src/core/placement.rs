//! Board placement: each quest lands in exactly one bucket.

use crate::core::progress::quest_completion;
use crate::models::category::{ALL_CATEGORIES, Category};
use crate::models::quest::Quest;

/// Where a quest card lands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Category(Category),
    Completed,
}

impl Bucket {
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Category(c) => c.label(),
            Bucket::Completed => "Completed",
        }
    }
}

/// Completed placement is derived from KPI state and takes precedence over
/// the category column. It is never set directly by the user.
pub fn place(quest: &Quest) -> Bucket {
    if quest_completion(quest) == 100 {
        Bucket::Completed
    } else {
        Bucket::Category(quest.category)
    }
}

/// Group quests into the four category buckets plus Completed, keeping the
/// backing order (created-at descending) within each bucket.
pub fn bucketize(quests: &[Quest]) -> Vec<(Bucket, Vec<&Quest>)> {
    let mut out: Vec<(Bucket, Vec<&Quest>)> = ALL_CATEGORIES
        .iter()
        .map(|c| (Bucket::Category(*c), Vec::new()))
        .collect();
    out.push((Bucket::Completed, Vec::new()));

    for quest in quests {
        let bucket = place(quest);
        if let Some((_, members)) = out.iter_mut().find(|(b, _)| *b == bucket) {
            members.push(quest);
        }
    }

    out
}
