mod atomic;
mod backend;
mod cell;
mod error;
mod flag;
pub mod ops;
mod word;

#[cfg(target_has_atomic = "64")]
pub use atomic::AtomicLong;
pub use atomic::{Atomic, AtomicByte, AtomicInt, AtomicPtrInt};
pub use cell::AtomicCell;
pub use error::CellError;
pub use flag::AtomicFlag;
pub use word::Word;
