// tests/common.rs

use std::fs;
use std::path::Path;
use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn dirsort_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dirsort"));
    // Keep the runs hermetic: no provider keys or model overrides from the host.
    for var in [
        "DEEPINFRA_API_KEY",
        "DEEPSEEK_API_KEY",
        "GROQ_API_KEY",
        "OPENAI_API_KEY",
        "TEXT_LLM_MODEL",
        "VISION_LLM_MODEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Writes `content` to `dir/relative`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative: &str,
    content: &str,
) -> std::io::Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(())
}
