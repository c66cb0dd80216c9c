//! Integration tests for the agentc compiler

mod compile_pipeline;
mod config_integration;
mod failure_modes;
mod test_utils;
