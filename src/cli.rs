//! CLI domain: parse, route, help, output, and presentation only.
//! No pipeline logic lives here; the route table calls into `build` and `source`.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, output_format};
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_compile_report, format_profiles, format_validation_failure, format_validation_json,
    format_validation_report,
};
pub use route::RunContext;
