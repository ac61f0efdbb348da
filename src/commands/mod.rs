mod context;
mod tally;

pub use context::{apply_cli_overrides, color_choice_to_mode, load_config, open_input, write_output};
pub use tally::{ingest, run_tally, run_tally_impl};
