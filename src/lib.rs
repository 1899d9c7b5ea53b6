//! Workspace-level integration tests for solarscan.
//!
//! The tests live in `tests/` and drive the image, provider, core and CLI
//! crates together.
