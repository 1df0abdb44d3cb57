//! Help command handler

use crate::tr;
use crate::utils::errors::Result;

/// Reply to /help
pub fn render_help(command_list: &str) -> Result<String> {
    let header = tr!("commands.help.header")?;
    Ok(format!("{}\n\n{}", header, command_list))
}
