// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_segment::ok;
use r3bl_segment_cmdr::{CLIArg, CommonResult, DisplayPreference, GlobalOption,
                        TracingConfig, handle_seg_command, try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    if should_log {
        try_initialize_logging_global(&tracing_config(&cli_arg.global_options))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let output = handle_seg_command(cli_arg.command);

    if should_log {
        tracing::debug!(message = "Stop logging...", ok = output.is_ok());
    }

    print!("{}", output?);
    ok!()
}

fn tracing_config(global_options: &GlobalOption) -> TracingConfig {
    let level_filter = global_options.log_level;
    match &global_options.log_file {
        Some(path) => TracingConfig::new_file_and_display(
            Some(path.clone()),
            DisplayPreference::Stderr,
            level_filter,
        ),
        None => TracingConfig::new_display(DisplayPreference::Stderr, level_filter),
    }
}
