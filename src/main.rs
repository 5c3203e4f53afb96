// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Pivotal: draws every shape kind, rotates one, and replays the history

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    pivotal::run(settings_path)
}
