//! Contains some types used across the layers

use std::result;


/// Errors crossing layer boundaries are boxed, carrying a contextual message built along the way
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
