use anyhow::Result;
use clap::Parser;
use nonce_check::{NonceCheckCmd, init_logging};

fn main() -> Result<()> {
    init_logging();

    let cmd = NonceCheckCmd::parse();
    cmd.run(&mut std::io::stdout().lock())?;
    Ok(())
}
