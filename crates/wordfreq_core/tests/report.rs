use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{aggregate, FrequencyPair, FrequencyPairs, SortOrder};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(freq_logging::initialize_for_tests);
}

const SAMPLE: &str = "the cat sat on the mat the cat ran";

fn texts(pairs: &FrequencyPairs) -> Vec<&str> {
    pairs
        .iter()
        .map(|pair| std::str::from_utf8(pair.text()).unwrap())
        .collect()
}

#[test]
fn by_text_renders_ascii_order() {
    init_logging();
    let pairs = FrequencyPairs::sorted(aggregate(SAMPLE.split_whitespace()), SortOrder::Text);

    assert_eq!(
        pairs.to_string(),
        "cat: 2\nmat: 1\non: 1\nran: 1\nsat: 1\nthe: 3\n"
    );
}

#[test]
fn by_text_is_byte_wise() {
    init_logging();
    let map = aggregate(["b", "B", "a", "_", "é", "Z"]);
    let pairs = FrequencyPairs::sorted(map, SortOrder::Text);
    assert_eq!(texts(&pairs), vec!["B", "Z", "_", "a", "b", "é"]);
}

#[test]
fn by_text_is_idempotent() {
    init_logging();
    let mut pairs = FrequencyPairs::sorted(aggregate(SAMPLE.split_whitespace()), SortOrder::Text);
    let once = pairs.clone();
    pairs.sort(SortOrder::Text);
    assert_eq!(pairs, once);
}

#[test]
fn by_count_is_non_increasing_with_text_tie_break() {
    init_logging();
    let pairs = FrequencyPairs::sorted(aggregate(SAMPLE.split_whitespace()), SortOrder::Count);

    assert!(pairs
        .as_slice()
        .windows(2)
        .all(|w| w[0].count() >= w[1].count()));
    assert_eq!(
        texts(&pairs),
        vec!["the", "cat", "mat", "on", "ran", "sat"]
    );
}

#[test]
fn resorting_switches_order() {
    init_logging();
    let mut pairs = FrequencyPairs::sorted(aggregate(SAMPLE.split_whitespace()), SortOrder::Count);
    pairs.sort(SortOrder::Text);
    assert_eq!(texts(&pairs)[0], "cat");
}

#[test]
fn pairs_round_trip_to_the_same_map() {
    init_logging();
    let map = aggregate(SAMPLE.split_whitespace());
    let pairs = FrequencyPairs::from_map(map.clone());

    assert_eq!(pairs.len(), map.len());
    assert_eq!(pairs.total(), map.total());
    assert_eq!(pairs.to_map(), map);
}

#[test]
fn to_map_sums_duplicate_texts() {
    let pairs: FrequencyPairs = vec![
        FrequencyPair::new("a", 2),
        FrequencyPair::new("b", 1),
        FrequencyPair::new("a", 3),
    ]
    .into_iter()
    .collect();
    let map = pairs.to_map();
    assert_eq!(map.get("a"), Some(5));
    assert_eq!(map.get("b"), Some(1));
}

#[test]
fn empty_map_renders_nothing() {
    let pairs = FrequencyPairs::sorted(aggregate(Vec::<String>::new()), SortOrder::Text);
    assert!(pairs.is_empty());
    assert_eq!(pairs.to_string(), "");
}

#[test]
fn pair_formats_as_text_colon_count() {
    let pair = FrequencyPair::new("word", 17);
    assert_eq!(pair.to_string(), "word: 17\n");
    assert_eq!(pair.text(), b"word");
    assert_eq!(pair.count(), 17);
}

#[test]
fn sort_order_parses_and_displays() {
    assert_eq!("text".parse::<SortOrder>(), Ok(SortOrder::Text));
    assert_eq!(" Count ".parse::<SortOrder>(), Ok(SortOrder::Count));
    assert!("length".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::Count.to_string(), "count");
    assert_eq!(SortOrder::default(), SortOrder::Text);
}

#[test]
fn non_utf8_tokens_stay_distinct_and_are_written_raw() {
    let map = aggregate([&b"caf\xe9"[..], &b"caf\xe8"[..], &b"caf\xe9"[..]]);
    assert_eq!(map.len(), 2);

    let pairs = FrequencyPairs::sorted(map, SortOrder::Text);
    let mut out = Vec::new();
    pairs.write_to(&mut out).unwrap();

    assert_eq!(out, b"caf\xe8: 1\ncaf\xe9: 2\n".to_vec());
    assert_eq!(pairs.as_slice()[0].text_lossy(), "caf\u{fffd}");
}

#[test]
fn by_text_orders_raw_bytes() {
    let map = aggregate([&b"\xff"[..], &b"z"[..], &b"\x80"[..]]);
    let pairs = FrequencyPairs::sorted(map, SortOrder::Text);
    let order: Vec<&[u8]> = pairs.iter().map(FrequencyPair::text).collect();
    assert_eq!(order, vec![&b"z"[..], &b"\x80"[..], &b"\xff"[..]]);
}
