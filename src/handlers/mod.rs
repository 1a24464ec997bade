//! HTTP handlers for the FarmBook API

pub mod animals;
pub mod auth;
pub mod fodder;
pub mod milk;
