// src/core/query/tests.rs
use super::*;
use crate::core::fixtures::{ids, record, sample_document, tagged};
use crate::core::types::Record;
use proptest::prelude::*;

fn selection(pairs: &[(&str, &str)]) -> FilterSelection {
    let mut selection = FilterSelection::new();
    for (facet, option) in pairs {
        selection.toggle(facet, option);
    }
    selection
}

#[test]
fn test_empty_query_and_selection_returns_everything_by_id() {
    let records = vec![record(3, "C", ""), record(1, "A", ""), record(2, "B", "")];
    let result = search(&records, "", &FilterSelection::new(), SortMode::Relevance);
    assert_eq!(ids(&result), vec![1, 2, 3]);

    let by_id = search(&records, "   ", &FilterSelection::new(), SortMode::Id);
    assert_eq!(ids(&by_id), vec![1, 2, 3]);
}

#[test]
fn test_text_match_is_case_insensitive_substring() {
    let records = vec![record(1, "Summer Fest", ""), record(2, "Winter Ball", "")];
    let result = search(&records, "mer fe", &FilterSelection::new(), SortMode::Relevance);
    assert_eq!(ids(&result), vec![1]);

    let result = search(&records, "  WINTER  ", &FilterSelection::new(), SortMode::Relevance);
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_text_match_covers_goal_features_and_aliases() {
    let mut with_goal = record(1, "One", "");
    with_goal.goal = Some("Raise funds".into());
    let mut with_features = record(2, "Two", "");
    with_features.features = Some("Live funding auction".into());
    let mut with_alias = record(3, "Three", "");
    with_alias.aliases = Some(vec!["Fundraiser".into()]);
    let plain = record(4, "Four", "nothing here");

    let records = vec![with_goal, with_features, with_alias, plain];
    let result = search(&records, "fund", &FilterSelection::new(), SortMode::Id);
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_absent_fields_never_match_and_never_fail() {
    let bare = Record { id: Some(9), ..Record::default() };
    assert!(matches_text(&bare, ""));
    assert!(!matches_text(&bare, "anything"));
    assert!(!matches_facets(&bare, &selection(&[("scale", "small")])));
}

#[test]
fn test_facets_and_across_or_within() {
    let records = vec![
        tagged(1, "a", vec![("scale", vec!["small"]), ("budget", vec!["low"])]),
        tagged(2, "b", vec![("scale", vec!["large"]), ("budget", vec!["low"])]),
        tagged(3, "c", vec![("scale", vec!["small"])]),
        tagged(4, "d", vec![("scale", vec!["medium"]), ("budget", vec!["high"])]),
    ];

    // OR within a facet.
    let or_within = selection(&[("scale", "small"), ("scale", "large")]);
    assert_eq!(ids(&search(&records, "", &or_within, SortMode::Id)), vec![1, 2, 3]);

    // AND across facets: record 3 has no budget entry at all.
    let and_across = selection(&[("scale", "small"), ("budget", "low")]);
    assert_eq!(ids(&search(&records, "", &and_across, SortMode::Id)), vec![1]);
}

#[test]
fn test_sort_by_id_treats_missing_as_zero() {
    let anonymous = Record { name: Some("nameless".into()), ..Record::default() };
    let records = vec![record(5, "e", ""), anonymous, record(2, "b", "")];
    let result = search(&records, "", &FilterSelection::new(), SortMode::Id);
    assert_eq!(result[0].id, None);
    assert_eq!(ids(&result), vec![0, 2, 5]);
}

#[test]
fn test_sort_by_name_is_locale_ordered() {
    let records = vec![
        record(1, "Банкет", ""),
        record(2, "Acoustic", ""),
        record(3, "acoustic", ""),
        record(4, "acoustic", ""),
        Record { id: Some(5), ..Record::default() },
    ];
    let result = search(&records, "", &FilterSelection::new(), SortMode::Name);
    // Missing name sorts as "", case ties put lower-case first, exact ties fall back to id.
    assert_eq!(ids(&result), vec![5, 3, 4, 2, 1]);
}

#[test]
fn test_relevance_prefers_name_then_definition() {
    let records = vec![
        record(1, "Board games", "An evening of gala fun"),
        record(2, "Gala", "Formal"),
        record(3, "Quiz", "Trivia"),
        record(4, "Afterparty", "Relaxed"),
        record(5, "Spring gala", "A gala to welcome spring"),
    ];
    let mut alias_only = record(6, "Masquerade", "Masks");
    alias_only.aliases = Some(vec!["Gala ball".into()]);
    let records = [records, vec![alias_only]].concat();

    let result = search(&records, "gala", &FilterSelection::new(), SortMode::Relevance);
    // 5 hits on name and definition, 2 on name only, 1 on definition only,
    // 6 only through an alias.
    assert_eq!(ids(&result), vec![5, 2, 1, 6]);
}

#[test]
fn test_relevance_with_empty_query_matches_id_order() {
    let document = sample_document();
    let relevance = search(&document.records, "", &FilterSelection::new(), SortMode::Relevance);
    let by_id = search(&document.records, "", &FilterSelection::new(), SortMode::Id);
    assert_eq!(ids(&relevance), ids(&by_id));
    assert_eq!(relevance.len(), 20);
}

#[test]
fn test_sample_catalog_gala_with_large_scale() {
    let document = sample_document();
    let chosen = selection(&[("scale", "large")]);

    let result = search(&document.records, "gala", &chosen, SortMode::Relevance);
    assert_eq!(ids(&result), vec![1, 11, 18, 4, 6, 7, 9]);

    let mut as_set = ids(&result);
    as_set.sort_unstable();
    assert_eq!(as_set, vec![1, 4, 6, 7, 9, 11, 18]);
}

#[test]
fn test_search_indices_point_into_records() {
    let records = vec![record(2, "b", ""), record(1, "a", "")];
    let indices = search_indices(&records, "", &FilterSelection::new(), SortMode::Id);
    assert_eq!(indices, vec![1, 0]);
}

#[test]
fn test_sort_mode_parsing() {
    assert_eq!("relevance".parse::<SortMode>(), Ok(SortMode::Relevance));
    assert_eq!(" Name ".parse::<SortMode>(), Ok(SortMode::Name));
    assert_eq!("id".parse::<SortMode>(), Ok(SortMode::Id));
    assert!("date".parse::<SortMode>().is_err());
    assert_eq!(SortMode::Name.to_string(), "name");
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        0u64..50,
        proptest::option::of("[a-d ]{0,6}"),
        proptest::collection::vec("[x-z]", 0..3),
        proptest::collection::vec("[p-r]", 0..3),
    )
        .prop_map(|(id, name, scale, budget)| {
            let mut facets = Vec::new();
            if !scale.is_empty() {
                facets.push(("scale".to_string(), scale));
            }
            if !budget.is_empty() {
                facets.push(("budget".to_string(), budget));
            }
            Record { id: Some(id), name, filters: Some(facets), ..Record::default() }
        })
}

proptest! {
    #[test]
    fn result_is_a_subset_satisfying_both_predicates(
        records in proptest::collection::vec(arb_record(), 0..30),
        query in "[a-d]{0,2}",
        scale in proptest::collection::vec("[x-z]", 0..3),
    ) {
        let mut chosen = FilterSelection::new();
        for option in &scale {
            if !chosen.contains("scale", option) {
                chosen.toggle("scale", option);
            }
        }
        let result = search(&records, &query, &chosen, SortMode::Relevance);
        let normalized = normalize_query(&query);

        let expected = records
            .iter()
            .filter(|r| matches_text(r, &normalized) && matches_facets(r, &chosen))
            .count();
        prop_assert_eq!(result.len(), expected);
        for r in &result {
            if let Some((_, options)) = chosen.iter().next() {
                let values = r.facet_values("scale").unwrap_or_default();
                prop_assert!(values.iter().any(|v| options.contains(v)));
            }
        }
    }

    #[test]
    fn every_mode_yields_a_total_order_ending_on_id(
        records in proptest::collection::vec(arb_record(), 0..30),
        query in "[a-d]{0,2}",
    ) {
        for mode in [SortMode::Relevance, SortMode::Name, SortMode::Id] {
            let result = search(&records, &query, &FilterSelection::new(), mode);
            let normalized = normalize_query(&query);
            for pair in result.windows(2) {
                prop_assert_ne!(
                    compare(pair[0], pair[1], mode, &normalized),
                    std::cmp::Ordering::Greater
                );
            }
        }
    }
}
