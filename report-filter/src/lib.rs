/*!
# Report Filter

Filtering and text search over a test report tree:

```text
TestCase
  ├─> Action
  │     ├─> Action (nested, any depth)
  │     └─> Verification
  │           └─> Entry (nested, any depth)
  └─> Message
```

- **Filtering** keeps the nodes that pass a [`FilterConfig`] and every action
  on the way to them, returned as [`NodeKey`]s in document order.
- **Search** counts case-insensitive occurrences of a query per node field so
  a viewer can highlight and step through them.

## Example

```rust
use report_filter::{Action, FilterBlock, FilterConfig, FilterPath, FilterType, TestCase};

let test_case = TestCase {
    actions: vec![
        Action { service_name: Some("one service".into()), ..Action::new(1, "send") },
        Action { service_name: Some("three service".into()), ..Action::new(2, "send") },
    ],
    ..Default::default()
};
let config = FilterConfig::default()
    .with_types([FilterType::Action])
    .with_block(FilterBlock::new(FilterPath::Service, ["one", "two"]));

let results = report_filter::filtrate(&test_case, &config)?;
assert_eq!(results.to_strings(), vec!["action-1"]);
# Ok::<(), report_filter::FilterError>(())
```

Everything here is synchronous and side-effect free; a compiled
[`FilterSet`] can be applied to any number of reports.
*/

mod error;
pub mod filter;
pub mod keys;
pub mod model;
pub mod search;

pub use error::{FilterError, Result};
pub use filter::{
    FilterBlock, FilterConfig, FilterPath, FilterResults, FilterSet, FilterType, filtrate,
};
pub use keys::{NodeKey, key_for_action, key_for_message, key_for_verification};
pub use model::{
    Action, ActionNode, Message, Parameter, Status, StatusType, TestCase, Verification,
    VerificationEntry,
};
pub use search::{SearchKey, SearchResults, search};
