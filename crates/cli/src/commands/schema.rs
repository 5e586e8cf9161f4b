use anyhow::Result;
use runlet_core::configs::config_schema_json;

pub fn execute() -> Result<()> {
    let schema =
        config_schema_json().map_err(|e| anyhow::anyhow!("Failed to render schema: {}", e))?;
    println!("{}", schema);

    Ok(())
}
