pub mod days;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod recognizers;
