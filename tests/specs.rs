// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level end-to-end specs, driven through the real `dwsh`
//! binary. Stdin here is never a terminal, so the prompt stays empty and
//! stdout carries command output alone.

mod prelude {
    pub use assert_cmd::Command;

    /// Locate the `target/{debug,release}` directory from the test
    /// binary's own path, since this workspace's root package does not
    /// depend on the `dwsh` binary crate and so `CARGO_BIN_EXE_dwsh` is
    /// never set by cargo.
    fn target_dir() -> std::path::PathBuf {
        let exe = std::env::current_exe().expect("current exe path");
        exe.ancestors()
            .find(|dir| matches!(dir.file_name().and_then(|n| n.to_str()), Some("debug") | Some("release")))
            .expect("could not locate target/{debug,release} from test binary path")
            .to_path_buf()
    }

    /// The dwsh binary, environment untouched.
    pub fn dwsh() -> Command {
        let bin = target_dir().join("dwsh");
        Command::new(bin)
    }

    /// Run a script through dwsh on stdin and capture the outcome.
    pub fn run_script(script: &str) -> std::process::Output {
        dwsh().write_stdin(script.to_string()).output().expect("dwsh runs")
    }

    pub fn stdout_of(output: &std::process::Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    pub fn stderr_of(output: &std::process::Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}

#[path = "specs/shell/mod.rs"]
mod shell;
