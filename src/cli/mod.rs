mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_ingest, print_item, print_outcome, print_response, print_status};
