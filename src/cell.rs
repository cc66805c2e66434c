use crate::error::CellError;
use std::{cell::UnsafeCell, fmt, mem};

/// Opaque storage for one atomic value, typed by `Atomic<T>` or `AtomicFlag`.
#[repr(C, align(16))]
pub struct AtomicCell {
    words: UnsafeCell<[i32; 4]>,
}

impl AtomicCell {
    pub const SIZE: usize = mem::size_of::<[i32; 4]>();
    pub const ALIGN: usize = 16;

    pub const fn new() -> Self {
        Self {
            words: UnsafeCell::new([0; 4]),
        }
    }

    pub fn as_ptr(&self) -> *mut u8 {
        self.words.get() as *mut u8
    }

    // safety: ptr points to SIZE bytes valid for 'a, only accessed through the cell
    #[allow(clippy::missing_safety_doc)]
    pub unsafe fn from_ptr<'a>(ptr: *mut u8) -> Result<&'a Self, CellError> {
        if ptr.is_null() {
            return Err(CellError::Null);
        }
        let addr = ptr as usize;
        if addr % Self::ALIGN != 0 {
            return Err(CellError::Misaligned {
                addr,
                align: Self::ALIGN,
            });
        }
        Ok(&*(ptr as *const Self))
    }
}

unsafe impl Sync for AtomicCell {}

impl Default for AtomicCell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell").finish_non_exhaustive()
    }
}
