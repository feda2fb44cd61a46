mod output_test;
mod records_test;
