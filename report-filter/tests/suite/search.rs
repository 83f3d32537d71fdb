use super::support::action;
use super::support::entry;
use super::support::message;
use pretty_assertions::assert_eq;
use report_filter::Action;
use report_filter::Message;
use report_filter::NodeKey;
use report_filter::Parameter;
use report_filter::SearchKey;
use report_filter::TestCase;
use report_filter::Verification;
use report_filter::search;

fn report() -> TestCase {
    let mut side = entry("Side");
    side.sub_entries = vec![entry("SideCode")];
    TestCase {
        actions: vec![
            Action {
                parameters: vec![Parameter {
                    name: "Side".into(),
                    value: Some("BUY".into()),
                    sub_parameters: Vec::new(),
                }],
                ..action(
                    1,
                    vec![
                        Verification {
                            entries: vec![side],
                            ..Verification::new(2, "check side")
                        }
                        .into(),
                        action(3, Vec::new()).into(),
                    ],
                )
            },
        ],
        messages: vec![Message {
            content_human_readable: Some("Side=BUY; side=SELL".into()),
            ..message(4)
        }],
        ..Default::default()
    }
}

#[test]
fn nested_fields_are_keyed_by_path() {
    let results = search(&report(), "SIDE");

    let entries: Vec<(&str, usize)> = results.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("action-1-parameters-0-name", 1),
            ("action-1-verification-2-name", 1),
            ("action-1-verification-2-entries-0-name", 1),
            ("action-1-verification-2-entries-0-0-name", 1),
            ("msg-4-contentHumanReadable", 2),
        ]
    );
    assert_eq!(results.total(), 6);
}

#[test]
fn nested_actions_are_searched() {
    let results = search(&report(), "action 3");

    assert_eq!(results.get("action-3-name"), Some(1));
    assert_eq!(results.len(), 1);
}

#[test]
fn stepping_through_every_occurrence() {
    let results = search(&report(), "side");

    let visited: Vec<&str> = (0..results.total())
        .filter_map(|index| results.key_for_index(index))
        .collect();
    assert_eq!(visited.len(), 6);
    assert_eq!(visited.last(), Some(&"msg-4-contentHumanReadable"));
    assert_eq!(results.start_index("msg-4-contentHumanReadable"), Some(4));
}

#[test]
fn no_occurrences_yield_empty_results() {
    let results = search(&report(), "cancel");

    assert!(results.is_empty());
    assert_eq!(results.key_for_index(0), None);
}

#[test]
fn expand_path_reaches_nested_entries() {
    let mut leg = entry("Leg");
    leg.sub_entries = vec![entry("Price"), entry("LegSide")];
    let mut legs = entry("Legs");
    legs.sub_entries = vec![entry("Count"), leg];
    let test_case = TestCase {
        actions: vec![action(
            5,
            vec![
                Verification {
                    entries: vec![entry("Side"), legs],
                    ..Verification::new(6, "check legs")
                }
                .into(),
            ],
        )],
        ..Default::default()
    };

    let results = search(&test_case, "side");

    assert_eq!(results.total(), 2);
    assert_eq!(
        results.search_key_for_index(1),
        Some(SearchKey::new(
            NodeKey::verification(5, 6),
            "entries-1-1-1-name"
        ))
    );
    assert_eq!(results.verification_expand_path(0, 5, 6), vec![0]);
    assert_eq!(results.verification_expand_path(1, 5, 6), vec![1, 1, 1]);
    assert_eq!(results.verification_expand_path(1, 5, 7), Vec::<usize>::new());
}
