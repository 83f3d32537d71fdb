mod report_json;
mod search;
mod support;
