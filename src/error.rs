use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("cell address is null")]
    Null,
    #[error("cell address {addr:#x} is not aligned to {align} bytes")]
    Misaligned { addr: usize, align: usize },
}
