pub mod flow_record;
pub mod protocol;
pub mod tag_rule;
