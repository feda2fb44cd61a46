use csv::ByteRecord;

use crate::parsers::parser::FlowRecordError;

const DESTINATION_PORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// The two fields of a flow log line that classification looks at.
///
/// Values are kept as signed integers: a numeric but out-of-range port or
/// protocol is still a well-formed record, it just never hits a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowRecord {
    pub destination_port: i64,
    pub protocol: i64,
}

impl FlowRecord {
    /// Extracts the destination port and protocol number from a space-delimited record.
    ///
    /// Runs of delimiters produce empty fields in the raw record; those are
    /// dropped before indexing so that `a  b` reads as two fields. Only the
    /// port and protocol fields are decoded, the rest may hold any bytes.
    pub fn from_record(record: &ByteRecord) -> Result<Self, FlowRecordError> {
        let line = record.position().map_or(0, |pos| pos.line());
        let fields: Vec<&[u8]> = record.iter().filter(|field| !field.is_empty()).collect();

        if fields.len() <= PROTOCOL_FIELD {
            return Err(FlowRecordError::TooFewFields {
                line,
                expected: PROTOCOL_FIELD + 1,
                found: fields.len(),
            });
        }

        Ok(FlowRecord {
            destination_port: parse_field(
                fields[DESTINATION_PORT_FIELD],
                "destination port",
                line,
            )?,
            protocol: parse_field(fields[PROTOCOL_FIELD], "protocol", line)?,
        })
    }
}

fn parse_field(bytes: &[u8], field: &'static str, line: u64) -> Result<i64, FlowRecordError> {
    let value = std::str::from_utf8(bytes).map_err(|_| FlowRecordError::NonUtf8Field {
        line,
        field,
        value: String::from_utf8_lossy(bytes).into_owned(),
    })?;

    value
        .parse::<i64>()
        .map_err(|source| FlowRecordError::InvalidField {
            line,
            field,
            value: value.to_string(),
            source,
        })
}
