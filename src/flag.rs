use crate::{
    backend::{Backend, Selected},
    cell::AtomicCell,
};
use std::{fmt, sync::atomic::AtomicBool};

#[repr(transparent)]
pub struct AtomicFlag {
    cell: AtomicCell,
}

impl AtomicFlag {
    pub const fn new() -> Self {
        Self {
            cell: AtomicCell::new(),
        }
    }

    // safety: the cell is only ever used as a flag
    #[allow(clippy::missing_safety_doc)]
    pub unsafe fn from_cell(cell: &AtomicCell) -> &Self {
        &*(cell as *const AtomicCell as *const Self)
    }

    pub fn as_cell(&self) -> &AtomicCell {
        &self.cell
    }

    pub fn init(&mut self) {
        *self.as_raw_mut() = false;
    }

    pub fn load(&self) -> bool {
        Selected::flag_load(self.as_raw())
    }

    /// Returns whether the flag was already set.
    pub fn test_and_set(&self) -> bool {
        Selected::test_and_set(self.as_raw())
    }

    pub fn clear(&self) {
        Selected::clear(self.as_raw())
    }

    fn as_raw(&self) -> &AtomicBool {
        unsafe { &*(self.cell.as_ptr() as *const AtomicBool) }
    }

    fn as_raw_mut(&mut self) -> &mut bool {
        unsafe { &mut *(self.cell.as_ptr() as *mut bool) }
    }
}

impl Default for AtomicFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFlag").field(&self.load()).finish()
    }
}
