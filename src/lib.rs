// Library exports for the skillplan CLI
// This allows testing of internal modules

pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod models;
pub mod storage;
