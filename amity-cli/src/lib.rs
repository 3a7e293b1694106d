pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::AmityCliContext;
pub use handlers::handle_command;
pub use output::{
    CliColors, format_association, format_error, format_info, format_success, format_value,
    format_warning, output_error_json, print_person, print_person_list,
};
pub use utils::{in_value_range, parse_association};
