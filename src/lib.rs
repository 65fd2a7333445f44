#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod assertions;
pub mod models;
pub mod object_storage;
mod runtime;
pub mod services;
pub mod verification;
