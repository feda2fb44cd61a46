use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;

use log::{debug, warn};

use crate::parsers::{
    csv_parser::flow_reader,
    parser::{FlowRecordError, ReadError},
};
use crate::records::{flow_record::FlowRecord, tag_rule::TagRule};

/// How many flow records hit one rule of the lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: TagRule,
    pub count: u64,
}

/// Result of one classification pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Matches per tag name. Rules sharing a name add up here.
    pub tag_counts: BTreeMap<String, u64>,
    /// Records that hit no rule at all.
    pub untagged: u64,
    /// One entry per rule, in lookup table order.
    pub rule_matches: Vec<RuleMatch>,
    /// Records that could not be read and were left out of every count.
    pub skipped: u64,
}

/// Accumulates matches of flow records against a fixed list of tag rules.
///
/// The rules are borrowed and never changed; per-rule counts are kept in a
/// parallel vector and handed out in the final `Classification`.
pub struct Classifier<'a> {
    rules: &'a [TagRule],
    rule_counts: Vec<u64>, // Indexed like `rules`
    tag_counts: BTreeMap<String, u64>,
    untagged: u64,
    skipped: u64,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a [TagRule]) -> Self {
        Self {
            rules,
            rule_counts: vec![0; rules.len()],
            tag_counts: BTreeMap::new(),
            untagged: 0,
            skipped: 0,
        }
    }

    /// Matches a record against every rule and updates the counts.
    ///
    /// Each matching rule is counted on its own, so a record hitting two rules
    /// with the same tag adds two to that tag. Returns the number of rules hit.
    pub fn process_record(&mut self, record: &FlowRecord) -> usize {
        let mut hits = 0;

        for (rule, count) in self.rules.iter().zip(self.rule_counts.iter_mut()) {
            if rule.matches(record.destination_port, record.protocol) {
                *self.tag_counts.entry(rule.tag.clone()).or_insert(0) += 1;
                *count += 1;
                hits += 1;
            }
        }

        if hits == 0 {
            debug!(
                "Untagged flow: port {} protocol {}",
                record.destination_port, record.protocol
            );
            self.untagged += 1;
        }

        hits
    }

    /// Records a flow line that could not be read. It does not count as untagged.
    pub fn skip_record(&mut self, err: &FlowRecordError) {
        warn!("Skipping flow record: {}", err);
        self.skipped += 1;
    }

    pub fn finish(self) -> Classification {
        let rule_matches = self
            .rules
            .iter()
            .zip(self.rule_counts)
            .map(|(rule, count)| RuleMatch {
                rule: rule.clone(),
                count,
            })
            .collect();

        Classification {
            tag_counts: self.tag_counts,
            untagged: self.untagged,
            rule_matches,
            skipped: self.skipped,
        }
    }
}

/// Opens the flow log at `file_path` and classifies it against `rules`.
pub fn classify_file(file_path: &str, rules: &[TagRule]) -> Result<Classification, ReadError> {
    let file = File::open(file_path)?;
    classify(file, rules)
}

/// Classifies every space-delimited flow record of `reader` against `rules`.
///
/// Malformed records are logged and skipped; the pass only stops early when
/// the underlying stream fails.
pub fn classify<R: Read>(reader: R, rules: &[TagRule]) -> Result<Classification, ReadError> {
    let mut rdr = flow_reader(reader);
    let mut classifier = Classifier::new(rules);

    for result in rdr.byte_records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(ReadError::Csv(err)),
            Err(err) => {
                classifier.skip_record(&FlowRecordError::Csv(err));
                continue;
            }
        };

        match FlowRecord::from_record(&record) {
            Ok(flow) => {
                classifier.process_record(&flow);
            }
            Err(err) => classifier.skip_record(&err),
        }
    }

    Ok(classifier.finish())
}
