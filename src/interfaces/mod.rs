// Command-line presentation layer
pub mod cli;
