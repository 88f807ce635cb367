//! Application layer: page view-models and refresh loops over the
//! shared state.

pub mod pages;
