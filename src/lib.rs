//! mvnlink - dependency lookup library for Gradle and Maven build files
//!
//! This library provides the core functionality for turning a dependency
//! declaration into a Maven repository URL:
//! - Gradle declarations (function-call, short and named-argument forms)
//! - Maven POM `<dependency>` blocks
//! - Placeholder resolution against Gradle project properties

pub mod browser;
pub mod cli;
pub mod domain;
pub mod editor;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod project;
pub mod properties;
pub mod registry;
