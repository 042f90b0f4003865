pub mod alert_rules;
pub mod alerts;
pub mod measurements;
pub mod ruchers;
pub mod ruches;
