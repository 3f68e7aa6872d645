//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Sample script covering dialogue, commands, comments and branching.
pub const SAMPLE_SCRIPT: &str = "\
changeBg:bg.webp -next
changeFigure:stand.png -left -next
WebGAL:Welcome to the playground! -vocal=v1.ogg
; a comment line

:Narration continues here.
choose:Left:left.txt|Right:right.txt
end";

/// Number of lines in [`SAMPLE_SCRIPT`].
pub const SAMPLE_LINES: usize = 8;

/// Path to the compiled playground binary
pub fn playground_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_webgal-playground"))
}

/// Run the playground binary in `dir`, with preferences kept inside it
pub fn run_playground_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(playground_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute webgal-playground binary")
}

/// Write [`SAMPLE_SCRIPT`] into `dir` and return its path
pub fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("start.txt");
    std::fs::write(&path, SAMPLE_SCRIPT).unwrap();
    path
}
