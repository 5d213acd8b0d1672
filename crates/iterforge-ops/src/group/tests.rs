use super::*;
use iterforge_test::{init_test_tracing, CountingSource, FlakySource};

fn drain<I, P>(groups: GroupBy<I, P>) -> Vec<(P::Output, Vec<I::Item>)>
where
    I: Iterator,
    P: Projection<I::Item, Error = std::convert::Infallible>,
    P::Output: PartialEq + Clone,
{
    groups.map(|(key, group)| (key, group.collect())).collect()
}

#[test]
fn adjacency_on_sorted_input() {
    init_test_tracing();
    let mut pairs = vec![("b", 3), ("a", 1), ("c", 2), ("a", 2), ("b", 1)];
    pairs.sort();
    let grouped: Vec<(&str, Vec<i32>)> = groupby(pairs, |pair| pair.0)
        .map(|(key, group)| (key, group.map(|(_, value)| value).collect()))
        .collect();
    assert_eq!(
        grouped,
        vec![("a", vec![1, 2]), ("b", vec![1, 3]), ("c", vec![2])]
    );
}

#[test]
fn no_global_regrouping() {
    let grouped = drain(groupby(vec![1, 1, 2, 2, 1, 1], |x| *x));
    assert_eq!(
        grouped,
        vec![(1, vec![1, 1]), (2, vec![2, 2]), (1, vec![1, 1])]
    );
}

#[test]
fn identity_key() {
    let keys: String = groupby_identity("AAAABBBCCDAABBB".chars())
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, "ABCDAB");
}

#[test]
fn runs_of_letters() {
    let runs: Vec<String> = groupby("AAAABBBCCD".chars(), |c| *c)
        .map(|(_, group)| group.collect())
        .collect();
    assert_eq!(runs, vec!["AAAA", "BBB", "CC", "D"]);
}

#[test]
fn advancing_parent_invalidates_group() {
    let mut groups = groupby(vec![1, 1, 1, 2, 2, 3], |x| *x);
    let (first_key, mut first) = groups.next().unwrap();
    assert_eq!(first_key, 1);
    assert_eq!(first.next(), Some(1));

    let (second_key, second) = groups.next().unwrap();
    assert_eq!(second_key, 2);
    assert!(first.is_stale());
    // The two unread 1s were skipped, not retained.
    assert_eq!(first.next(), None);
    assert_eq!(second.collect::<Vec<_>>(), vec![2, 2]);

    let (third_key, third) = groups.next().unwrap();
    assert_eq!(third_key, 3);
    assert_eq!(third.collect::<Vec<_>>(), vec![3]);
    assert!(groups.next().is_none());
}

#[test]
fn unconsumed_groups_are_skipped() {
    let keys: Vec<i32> = groupby(vec![1, 1, 2, 2, 1, 1], |x| *x)
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, vec![1, 2, 1]);
}

#[test]
fn group_sticky_after_end() {
    let mut groups = groupby(vec!['a', 'b'], |c| *c);
    let (_, mut group) = groups.next().unwrap();
    assert_eq!(group.next(), Some('a'));
    assert_eq!(group.next(), None);
    assert_eq!(group.next(), None);
    // The lookahead element still starts the next group.
    let (key, mut group) = groups.next().unwrap();
    assert_eq!(key, 'b');
    assert_eq!(group.next(), Some('b'));
}

#[test]
fn construction_is_lazy() {
    let (source, pulls) = CountingSource::new(vec![1, 1, 2]);
    let mut groups = groupby(source, |x| *x);
    assert_eq!(pulls.get(), 0);
    let (_, mut group) = groups.next().unwrap();
    assert_eq!(pulls.get(), 1);
    assert_eq!(group.next(), Some(1));
    assert_eq!(pulls.get(), 1);
    assert_eq!(group.next(), Some(1));
    assert_eq!(group.next(), None);
    // The 2 was pulled as lookahead to end the group.
    assert_eq!(pulls.get(), 3);
}

#[test]
fn empty_source() {
    let mut groups = groupby(Vec::<u8>::new(), |x| *x);
    assert!(groups.next().is_none());
    assert!(groups.next().is_none());
    assert_eq!(groups.size_hint(), (0, Some(0)));
}

#[test]
fn sticky_over_flaky_source() {
    let mut groups = groupby(FlakySource::new(vec![1, 2, 3], 1), |x| *x);
    let (key, group) = groups.next().unwrap();
    assert_eq!(key, 1);
    assert_eq!(group.collect::<Vec<_>>(), vec![1]);
    assert!(groups.next().is_none());
    assert!(groups.next().is_none());
}

#[test]
fn key_failure_ends_group_then_reports() {
    let mut groups = try_groupby(vec!["1", "1", "x", "2"], |s| s.parse::<u8>());
    let (key, mut group) = groups.next().unwrap().unwrap();
    assert_eq!(key, 1);
    assert_eq!(group.next(), Some("1"));
    assert_eq!(group.next(), Some("1"));
    assert_eq!(group.next(), None);

    let err = groups.next().unwrap().unwrap_err();
    assert!(err.is_callback());
    assert!(groups.next().is_none());
}

#[test]
fn key_failure_on_first_element() {
    let mut groups = try_groupby(vec!["x"], |s| s.parse::<u8>());
    assert!(groups.next().unwrap().is_err());
    assert!(groups.next().is_none());
}

#[test]
fn fallible_keys_all_ok() {
    let keys: Result<Vec<u8>, _> = try_groupby(vec!["1", "1", "2"], |s| s.parse::<u8>())
        .map(|entry| entry.map(|(key, _)| key))
        .collect();
    assert_eq!(keys.unwrap(), vec![1, 2]);
}
