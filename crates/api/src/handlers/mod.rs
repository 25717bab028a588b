//! HTTP handlers, one module per resource.

pub mod auth;
pub mod code_repository;
pub mod environment;
pub mod global_variable;
pub mod project;
pub mod startup;
pub mod storage;
