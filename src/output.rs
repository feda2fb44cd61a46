use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;

use crate::{
    args::{ExportMethodType, OutputConfig},
    classifier::Classification,
};

pub const TAG_COUNTS_FILE: &str = "tag_counts.csv";
pub const PORT_PROTOCOL_COUNTS_FILE: &str = "port_protocol_counts.csv";

/// Writes the two summary tables of a classification pass.
pub struct OutputWriter {
    export_method: ExportMethodType,
    write_header: bool,
    export_dir: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(config: &OutputConfig) -> Self {
        OutputWriter {
            export_method: config.output,
            write_header: config.header,
            export_dir: config.export_dir.as_ref().map(PathBuf::from),
        }
    }

    pub fn write(&self, classification: &Classification) -> anyhow::Result<()> {
        match self.export_method {
            ExportMethodType::Print => {
                let mut writer = BufWriter::new(io::stdout().lock());
                write_tables(&mut writer, classification)?;
                writer.flush()?;
            }
            ExportMethodType::Csv => {
                let dir = self
                    .export_dir
                    .as_deref()
                    .context("export directory required for CSV output")?;
                self.write_csv_files(dir, classification)?;
            }
        }
        Ok(())
    }

    fn write_csv_files(&self, dir: &Path, classification: &Classification) -> anyhow::Result<()> {
        let tag_path = dir.join(TAG_COUNTS_FILE);
        debug!("Writing tag counts to {:?}", tag_path);
        let writer = csv::Writer::from_path(&tag_path)
            .with_context(|| format!("failed to create {}", tag_path.display()))?;
        write_tag_counts_csv(writer, classification, self.write_header)?;

        let port_path = dir.join(PORT_PROTOCOL_COUNTS_FILE);
        debug!("Writing port/protocol counts to {:?}", port_path);
        let writer = csv::Writer::from_path(&port_path)
            .with_context(|| format!("failed to create {}", port_path.display()))?;
        write_port_protocol_counts_csv(writer, classification, self.write_header)?;

        Ok(())
    }
}

/// Human-readable report: tag counts with the untagged total, then the
/// port/protocol counts of every rule that was hit at least once.
pub fn write_tables<W: Write>(writer: &mut W, classification: &Classification) -> io::Result<()> {
    writeln!(writer, "Tag | Count")?;
    for (tag, count) in &classification.tag_counts {
        writeln!(writer, "{} {}", tag, count)?;
    }
    writeln!(writer, "untagged = {}", classification.untagged)?;

    writeln!(writer, "Port | Protocol | Count")?;
    for rule_match in classification.rule_matches.iter().filter(|m| m.count > 0) {
        writeln!(
            writer,
            "{} {} {}",
            rule_match.rule.destination_port,
            rule_match.rule.protocol.number(),
            rule_match.count
        )?;
    }
    Ok(())
}

pub fn write_tag_counts_csv<W: Write>(
    mut writer: csv::Writer<W>,
    classification: &Classification,
    write_header: bool,
) -> csv::Result<()> {
    if write_header {
        writer.write_record(["Tag", "Count"])?;
    }
    for (tag, count) in &classification.tag_counts {
        writer.write_record([tag.as_str(), count.to_string().as_str()])?;
    }
    writer.write_record(["Untagged", classification.untagged.to_string().as_str()])?;
    writer.flush()?;
    Ok(())
}

pub fn write_port_protocol_counts_csv<W: Write>(
    mut writer: csv::Writer<W>,
    classification: &Classification,
    write_header: bool,
) -> csv::Result<()> {
    if write_header {
        writer.write_record(["Port", "Protocol", "Count"])?;
    }
    for rule_match in classification.rule_matches.iter().filter(|m| m.count > 0) {
        writer.write_record([
            rule_match.rule.destination_port.to_string(),
            rule_match.rule.protocol.number().to_string(),
            rule_match.count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
