use anyhow::Result;
use tracing::info;

use tacto_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("tacto starting");
    Session::new().run()?;
    Ok(())
}
