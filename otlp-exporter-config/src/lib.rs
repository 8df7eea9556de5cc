//! Configuration resolver for an OTLP trace exporter.
//!
//! This crate owns the configuration surface of an OTLP (OpenTelemetry
//! Protocol) trace exporter: it parses a nested config document, applies
//! defaults, validates the constrained keys, and produces a normalized
//! [`ExporterConfig`] for the exporter itself to consume. The exporter —
//! batching, retries, the actual gRPC/HTTP clients — lives elsewhere and is
//! reached only through this contract.
//!
//! - [`config`] - Schema, defaulting, and resolution (`ExporterConfig`)
//! - [`expand`] - `${env.*}` / `${file.*}` placeholder expansion
//! - [`error`] - Error types
//!
//! # Usage
//!
//! ```no_run
//! use otlp_exporter_config::ExporterConfig;
//!
//! let config = ExporterConfig::load_from_file("exporter.json5")?;
//! if config.enabled {
//!     println!("exporting over {} to {}", config.protocol, config.endpoint);
//! }
//! # Ok::<(), otlp_exporter_config::ConfigError>(())
//! ```
//!
//! Resolution happens once at startup and the result is immutable. There is
//! no async machinery here; everything is a pure transformation apart from
//! the env/file reads done during placeholder expansion.

pub mod config;
pub mod error;
pub mod expand;

// Re-export commonly used types at the crate root
pub use config::{
    DEFAULT_GRPC_ENDPOINT, DEFAULT_HTTP_ENDPOINT, ExporterConfig, GrpcConfig, HttpConfig,
    OtlpProtocol,
};
pub use error::{ConfigError, Result};
pub use expand::expand;
