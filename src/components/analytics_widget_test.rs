use super::*;

fn point(label: &str, volume_minor: i64) -> AnalyticsPoint {
    AnalyticsPoint { label: label.to_owned(), volume_minor, count: 1 }
}

#[test]
fn bars_scale_against_the_peak() {
    let series = vec![point("Mon", 5_000), point("Tue", 10_000), point("Wed", 2_500)];
    assert_eq!(bar_percents(&series), vec![50, 100, 25]);
}

#[test]
fn tiny_buckets_keep_a_visible_sliver() {
    let series = vec![point("a", 1), point("b", 1_000_000), point("c", 0)];
    assert_eq!(bar_percents(&series), vec![2, 100, 0]);
}

#[test]
fn empty_or_flat_series_has_no_bars() {
    assert!(bar_percents(&[]).is_empty());
    assert_eq!(bar_percents(&[point("a", 0), point("b", 0)]), vec![0, 0]);
}
