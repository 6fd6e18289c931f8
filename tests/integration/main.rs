//! End-to-end tests for the `fogline` binary.

mod basic_pipe;
mod color_control;
mod config_custom;
mod level_filter;
mod mixed_input;

use assert_cmd::Command;

/// A `fogline` command isolated from any user config file.
#[allow(deprecated)]
pub fn fogline() -> Command {
    let mut cmd = Command::cargo_bin("fogline").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/fogline-test-no-config");
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("FORCE_COLOR");
    cmd
}
