use csv::{Reader, ReaderBuilder, Trim};
use std::io::Read;

/// Delimiter of the lookup table.
pub const LOOKUP_DELIMITER: u8 = b',';
/// Delimiter of the flow log, which is not a comma.
pub const FLOW_DELIMITER: u8 = b' ';
pub const COMMENT: u8 = b'#';

/// Reader for the `<port>,<protocol>,<tag>` lookup table.
///
/// Field counts are not enforced here, so the builder can report the
/// offending row itself. Fields come back untrimmed; only leading
/// whitespace is insignificant and the builder strips it.
pub fn lookup_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(LOOKUP_DELIMITER)
        .comment(Some(COMMENT))
        .flexible(true)
        .from_reader(reader)
}

/// Reader for space-delimited flow log lines.
pub fn flow_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(FLOW_DELIMITER)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// True for rows whose first field begins with the comment marker once
/// leading whitespace is gone. The csv reader only recognises comments at
/// the very start of a line.
pub fn is_comment(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|field| field.trim_start().as_bytes().first() == Some(&COMMENT))
}
