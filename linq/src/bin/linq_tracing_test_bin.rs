// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_linq::{DisplayPreference, Sequence, TracingConfig, WriterConfig, sequence,
                try_initialize_logging_global};
use tracing_core::LevelFilter;

/// This is the binary under test for `tests/tracing_bin_stdio_test.rs`. It takes 1
/// argument: "stdout" or "stderr", and writes the debug events that [Sequence] emits for
/// failed preconditions to that display. There is no easy way to capture `stdout` and
/// `stderr` of the current process, so the test spawns this binary w/ `assert_cmd`.
fn main() -> miette::Result<()> {
    let arg = std::env::args().nth(1).unwrap_or_default();
    let display_preference = match arg.as_str() {
        "stderr" => DisplayPreference::Stderr,
        _ => DisplayPreference::Stdout,
    };

    try_initialize_logging_global(TracingConfig {
        writer_config: WriterConfig::Display(display_preference),
        level_filter: LevelFilter::DEBUG,
    })?;

    let empty = Sequence::<i32>::empty();
    let _unused = empty.first();
    let _unused = empty.at(0);

    let it = sequence![1, 2, 3];
    let _unused = it.at(7);
    let _unused = it.single();
    let _unused = it.skip(9);

    tracing::info!(message = "done", count = %it.count());

    Ok(())
}
