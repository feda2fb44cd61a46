pub mod csv_parser;
pub mod lookup_parser;
pub mod parser;
