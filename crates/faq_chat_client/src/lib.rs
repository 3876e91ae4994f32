//! Shared FAQ chatbot client library (config, HTTP wire types, backend client).
//! Used by the terminal chat view and the one-shot `faq-ask` binary.

pub mod client;
pub mod config;
pub mod messages;

pub use client::{Client, ClientError, StatusCode, DEFAULT_BASE_URL};
pub use config::{
    default_config_path, BackendSection, Config, ConfigError, LoggingSection, CONFIG_ENV,
};
