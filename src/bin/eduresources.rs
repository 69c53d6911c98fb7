use anyhow::Result;
use eduresources::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments and set up logging
    let action = cli::start()?;

    // Handle the action
    action.execute().await?;

    Ok(())
}
