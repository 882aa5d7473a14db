use std::cmp::Ordering;
use std::collections::BTreeMap;

use fahrplan_parser::Talk;
use serde::Serialize;

/// Talks of one day in chronological order. `name` is the day number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub name: i64,
    pub talks: Vec<Talk>,
}

/// Appends every item to the bucket for its key. Items keep their input order
/// within a bucket.
pub fn group_into<T, K, I, F>(items: I, groups: &mut BTreeMap<K, Vec<T>>, key: F)
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
}

/// Groups accepted talks into days ordered by day number, each sorted by start time.
///
/// Hidden talks are dropped. Talks with equal start times keep their input order.
pub fn schedule<I>(talks: I) -> Vec<Day>
where
    I: IntoIterator<Item = Talk>,
{
    let visible = talks.into_iter().filter(|talk| !talk.is_hidden());

    let mut by_day: BTreeMap<Option<i64>, Vec<Talk>> = BTreeMap::new();
    group_into(visible, &mut by_day, |talk| talk.day);

    by_day
        .into_iter()
        .filter_map(|(day, mut talks)| {
            let name = day?;
            talks.sort_by(by_start);
            Some(Day { name, talks })
        })
        .collect()
}

fn by_start(a: &Talk, b: &Talk) -> Ordering {
    match (a.start, b.start) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
