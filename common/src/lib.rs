//! Utilities shared by all the layers

pub mod types;
