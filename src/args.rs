use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Path to a TOML configuration file, replaces the input and output options
    #[clap(short, long)]
    pub config_file: Option<String>,

    /// Input datasets
    #[clap(flatten)]
    pub input: InputConfig,

    /// Output method
    #[clap(flatten)]
    pub output: OutputConfig,
}

/// Settings as read from a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// The lookup table mapping `<port>,<protocol>,<tag>`
    #[clap(short, long, default_value = "lookup.csv")]
    pub lookup: String,

    /// The space-delimited flow log to classify
    #[clap(short, long, default_value = "flow.csv")]
    pub flows: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            lookup: String::from("lookup.csv"),
            flows: String::from("flow.csv"),
        }
    }
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output method
    #[clap(short, long, value_enum, default_value_t = ExportMethodType::Print)]
    pub output: ExportMethodType,

    /// Directory for the report files (used if method is Csv)
    #[clap(long, required_if_eq("output", "csv"))]
    pub export_dir: Option<String>,

    /// Whether to write header rows in the CSV report files
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub header: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethodType {
    /// The report will be printed to the console
    #[default]
    Print,

    /// The report will be written to CSV files
    Csv,
}
