//! Asset domain model and services.

mod assets_model;
mod assets_service;
mod assets_traits;

pub use assets_model::*;
pub use assets_service::*;
pub use assets_traits::*;

#[cfg(test)]
mod assets_model_tests;
#[cfg(test)]
mod assets_service_tests;
