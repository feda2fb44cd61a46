use std::fs::File;
use std::io::Read;
use std::str::FromStr;

use csv::StringRecord;
use log::debug;

use super::csv_parser::{is_comment, lookup_reader};
use super::parser::{LookupError, ReadError};
use crate::records::{protocol::Protocol, tag_rule::TagRule};

const FIELDS_PER_ROW: usize = 3;

/// Opens the lookup table at `file_path` and builds the tag rules from it.
pub fn load_lookup_table(file_path: &str) -> Result<Vec<TagRule>, LookupError> {
    let file = File::open(file_path).map_err(ReadError::Io)?;
    build_lookup_table(file)
}

/// Builds the ordered list of tag rules from a `<port>,<protocol>,<tag>` table.
///
/// Either every row is valid and the full table comes back in file order, or
/// the first problem is returned and nothing is built. All rows are read
/// before any is validated, so a row with the wrong number of fields is
/// reported ahead of a bad port or protocol earlier in the table.
pub fn build_lookup_table<R: Read>(reader: R) -> Result<Vec<TagRule>, LookupError> {
    let mut rdr = lookup_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(ReadError::Csv)?;
        if is_comment(&record) {
            continue;
        }
        if record.len() != FIELDS_PER_ROW {
            return Err(LookupError::MalformedRow {
                row: rows.len() + 1,
                fields: record.len(),
            });
        }
        rows.push(record);
    }

    let rules = rows
        .iter()
        .map(parse_rule)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Built lookup table with {} rules", rules.len());

    Ok(rules)
}

fn parse_rule(record: &StringRecord) -> Result<TagRule, LookupError> {
    let port_field = record[0].trim_start();
    let port = port_field
        .parse::<i64>()
        .map_err(|source| LookupError::Parse {
            value: port_field.to_string(),
            source,
        })?;
    let port = u16::try_from(port).map_err(|_| LookupError::InvalidPort(port))?;

    let protocol_field = record[1].trim_start();
    let protocol = Protocol::from_str(&protocol_field.to_lowercase())
        .map_err(|_| LookupError::UnknownProtocol(protocol_field.to_string()))?;

    let rule = TagRule::new(port, protocol, record[2].trim_start());
    debug!(
        "Rule: {}/{} -> {}",
        rule.destination_port, rule.protocol, rule.tag
    );

    Ok(rule)
}
