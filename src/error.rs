use crate::seed_data::LoadError;
use crate::seed_table::ProbeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ProbeError: {0}")]
    Probe(#[from] ProbeError),
    #[error("LoadError: {0}")]
    Load(#[from] LoadError),
    #[error("Table '{0}' does not exist!")]
    TableMissing(String),
}
