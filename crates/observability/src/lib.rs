//! `mahameru-observability` — logging setup for binaries, demos and tests.

pub mod tracing;
