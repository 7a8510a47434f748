//! Commands that answer without a backend.

use super::{Cli, resolve_config};
use parley_core::{ModelInfo, TokenCountQuery};

/// Handle the `model-info` command.
pub fn handle_model_info_command(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let info = ModelInfo::for_model(config.model());
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

/// Handle the `token-count` command.
pub fn handle_token_count_command(text: &str) -> anyhow::Result<()> {
    let query = TokenCountQuery {
        text: text.to_string(),
    };
    println!("{}", serde_json::to_string(&query.count())?);
    Ok(())
}
