use report_filter::Action;
use report_filter::ActionNode;
use report_filter::FilterBlock;
use report_filter::FilterConfig;
use report_filter::FilterPath;
use report_filter::FilterType;
use report_filter::Message;
use report_filter::Verification;
use report_filter::VerificationEntry;

pub fn action(id: u32, sub_nodes: Vec<ActionNode>) -> Action {
    Action {
        sub_nodes,
        ..Action::new(id, format!("Action {id}"))
    }
}

pub fn named_action(id: u32, name: &str) -> Action {
    Action::new(id, name)
}

pub fn verification(id: u32) -> Verification {
    Verification::new(id, format!("Verification {id}"))
}

pub fn entry(name: &str) -> VerificationEntry {
    VerificationEntry {
        name: name.to_string(),
        expected: Some("1".to_string()),
        actual: Some("1".to_string()),
        ..Default::default()
    }
}

pub fn message(id: u32) -> Message {
    Message::new(id, format!("Message {id}"))
}

pub fn config(types: &[FilterType], blocks: &[(FilterPath, &[&str])]) -> FilterConfig {
    FilterConfig::new(
        types.to_vec(),
        blocks
            .iter()
            .map(|(path, values)| FilterBlock::new(*path, values.iter().copied()))
            .collect(),
    )
}
