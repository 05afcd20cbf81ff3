// Library root
// -----------
// This crate exposes a small library surface for the `gistup` binary.
//
// Module responsibilities:
// - `api`: Wire types for the gist payload/response and the blocking
//   HTTP client that performs the single POST.
// - `cli`: clap argument definitions and the linear upload flow.
// - `error`: The terminal error kinds surfaced to the user.
//
// Keeping this separation makes the payload construction and the HTTP
// client testable without going through the binary.
pub mod api;
pub mod cli;
pub mod error;
