pub mod config;
pub mod confirm;
pub mod error;
pub mod generate;
pub mod purge;
pub mod report;
pub mod run;
pub mod transport;

#[cfg(test)]
mod testing;
