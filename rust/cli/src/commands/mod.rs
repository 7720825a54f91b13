//! Command handler modules.
//!
//! Each command lives in its own file and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Configuration is resolved by the caller and passed in
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) are passed as parameters
//! - Errors propagate as `CliError`

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
