//! Field extraction shared by the filter matcher and the text search.

use crate::model::Action;
use crate::model::Message;
use crate::model::Parameter;
use crate::model::StatusType;
use crate::model::Verification;
use crate::model::VerificationEntry;
use std::fmt;
use std::fmt::Write as _;

/// Keeps values of adjacent fields from forming a match together.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Walks the textual fields of a node, handing each non-empty value to a sink
/// together with its dash-joined field path (`name`, `parameters-0-1-value`).
pub(crate) struct FieldVisitor<'a> {
    prefix: String,
    sink: &'a mut dyn FnMut(&str, &str),
}

impl<'a> FieldVisitor<'a> {
    pub(crate) fn new(sink: &'a mut dyn FnMut(&str, &str)) -> Self {
        Self {
            prefix: String::new(),
            sink,
        }
    }

    pub(crate) fn text(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        let len = self.prefix.len();
        self.prefix.push_str(name);
        (self.sink)(&self.prefix, value);
        self.prefix.truncate(len);
    }

    pub(crate) fn optional(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.text(name, value);
        }
    }

    pub(crate) fn scope(&mut self, segment: impl fmt::Display, body: impl FnOnce(&mut Self)) {
        let len = self.prefix.len();
        let _ = write!(self.prefix, "{segment}-");
        body(self);
        self.prefix.truncate(len);
    }
}

/// A report node that filter blocks can be evaluated against.
pub(crate) trait FilterTarget {
    fn status(&self) -> Option<StatusType>;

    /// Fields tested by a `service` block. Nodes without any never match one.
    fn service_fields(&self) -> Vec<&str>;

    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>);
}

impl FilterTarget for Action {
    fn status(&self) -> Option<StatusType> {
        self.status.as_ref().map(|status| status.status)
    }

    fn service_fields(&self) -> Vec<&str> {
        self.service_name.as_deref().into_iter().collect()
    }

    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        visitor.text("name", &self.name);
        visitor.optional("matrixId", self.matrix_id.as_deref());
        visitor.optional("description", self.description.as_deref());
        visitor.optional("serviceName", self.service_name.as_deref());
        visitor.optional("messageType", self.message_type.as_deref());
        visitor.optional("outcome", self.outcome.as_deref());
        visitor.optional(
            "status",
            self.status.as_ref().map(|status| status.status.as_ref()),
        );
        if !self.parameters.is_empty() {
            visitor.scope("parameters", |visitor| {
                visit_parameters(&self.parameters, visitor);
            });
        }
    }
}

fn visit_parameters(parameters: &[Parameter], visitor: &mut FieldVisitor<'_>) {
    for (index, parameter) in parameters.iter().enumerate() {
        visitor.scope(index, |visitor| {
            visitor.text("name", &parameter.name);
            visitor.optional("value", parameter.value.as_deref());
            visit_parameters(&parameter.sub_parameters, visitor);
        });
    }
}

impl FilterTarget for Verification {
    fn status(&self) -> Option<StatusType> {
        self.status.as_ref().map(|status| status.status)
    }

    fn service_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        visitor.text("name", &self.name);
        visitor.optional("description", self.description.as_deref());
        visitor.optional(
            "status",
            self.status.as_ref().map(|status| status.status.as_ref()),
        );
        if !self.entries.is_empty() {
            visitor.scope("entries", |visitor| visit_entries(&self.entries, visitor));
        }
    }
}

fn visit_entries(entries: &[VerificationEntry], visitor: &mut FieldVisitor<'_>) {
    for (index, entry) in entries.iter().enumerate() {
        visitor.scope(index, |visitor| {
            visitor.text("name", &entry.name);
            visitor.optional("expected", entry.expected.as_deref());
            visitor.optional("actual", entry.actual.as_deref());
            visitor.optional("status", entry.status.as_ref().map(|status| status.as_ref()));
            if !entry.is_leaf() {
                visit_entries(&entry.sub_entries, visitor);
            }
        });
    }
}

impl FilterTarget for Message {
    fn status(&self) -> Option<StatusType> {
        self.status.as_ref().map(|status| status.status)
    }

    fn service_fields(&self) -> Vec<&str> {
        self.from
            .as_deref()
            .into_iter()
            .chain(self.to.as_deref())
            .collect()
    }

    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) {
        visitor.text("msgName", &self.msg_name);
        visitor.optional("from", self.from.as_deref());
        visitor.optional("to", self.to.as_deref());
        visitor.optional(
            "status",
            self.status.as_ref().map(|status| status.status.as_ref()),
        );
        visitor.optional(
            "contentHumanReadable",
            self.content_human_readable.as_deref(),
        );
    }
}

/// Lower-cased concatenation of every field of `target`.
pub(crate) fn all_text(target: &dyn FilterTarget) -> String {
    let mut haystack = String::new();
    let mut sink = |_: &str, value: &str| push_lowercase(&mut haystack, value);
    target.visit_fields(&mut FieldVisitor::new(&mut sink));
    haystack
}

/// Lower-cased concatenation of the service fields, `None` when there are none.
pub(crate) fn service_text(target: &dyn FilterTarget) -> Option<String> {
    let fields = target.service_fields();
    if fields.is_empty() {
        return None;
    }
    let mut haystack = String::new();
    for field in fields {
        push_lowercase(&mut haystack, field);
    }
    Some(haystack)
}

fn push_lowercase(haystack: &mut String, value: &str) {
    if !haystack.is_empty() {
        haystack.push(FIELD_SEPARATOR);
    }
    haystack.push_str(&value.to_lowercase());
}
