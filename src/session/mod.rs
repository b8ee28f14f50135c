//! Session Driver
//!
//! Replays keystroke scripts from a reader through a dash-group dialog and
//! writes one snapshot per script line.

pub mod runner;
pub mod script;

pub use runner::{Session, Snapshot};
pub use script::{KeyAction, ScriptParser};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, stdin, stdout};

use crate::Config;

/// Drive a session over stdin/stdout until EOF
pub async fn serve(config: Config) -> Result<()> {
    let reader = tokio::io::BufReader::new(stdin());
    run(&config, reader, stdout()).await
}

/// Drive a session over any line source and sink
pub async fn run<R, W>(config: &Config, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new(config.ime_strategy)?;
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read script line")? {
        let output = match session.run_line(&line) {
            Ok(snapshot) if config.json => serde_json::to_string(&snapshot)?,
            Ok(snapshot) => snapshot.text,
            Err(e) => {
                log::warn!("Rejected script line {:?}: {}", line, e);
                format!("error: {}", e)
            }
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    log::info!("Input closed, ending session");
    Ok(())
}
