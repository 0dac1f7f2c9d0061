// ABOUTME: Library exports for githubfetch modules for testing and external use
// ABOUTME: Makes the pipeline, renderers and layout available to integration tests

pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod rendering;
