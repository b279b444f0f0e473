use std::path::Path;

use log::info;

use crate::impose::impose;
use crate::options::BookletOptions;
use crate::types::Result;

/// Read an input PDF into memory
pub async fn load_input(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(bytes)
}

/// Write a finished booklet to disk
pub async fn save_output(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(&path, bytes).await?;
    info!("Wrote {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

/// Convenience wrapper: load, impose, save.
pub async fn impose_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &BookletOptions,
) -> Result<()> {
    let bytes = load_input(input).await?;
    let booklet = impose(bytes, options).await?;
    save_output(output, &booklet).await
}
