use crate::{
    backend::{Backend, Selected},
    cell::AtomicCell,
    word::Word,
};
use std::{fmt, marker::PhantomData, os::raw::c_int, ptr};

#[repr(transparent)]
pub struct Atomic<T: Word> {
    cell: AtomicCell,
    _marker: PhantomData<T>,
}

pub type AtomicByte = Atomic<i8>;
pub type AtomicInt = Atomic<c_int>;
#[cfg(target_has_atomic = "64")]
pub type AtomicLong = Atomic<i64>;
pub type AtomicPtrInt = Atomic<isize>;

impl<T: Word> Atomic<T> {
    pub fn new(value: T) -> Self {
        let mut atomic = Self::zeroed();
        atomic.init(value);
        atomic
    }

    pub const fn zeroed() -> Self {
        Self {
            cell: AtomicCell::new(),
            _marker: PhantomData,
        }
    }

    // safety: the cell is only ever used as an Atomic<T> of this same T
    #[allow(clippy::missing_safety_doc)]
    pub unsafe fn from_cell(cell: &AtomicCell) -> &Self {
        &*(cell as *const AtomicCell as *const Self)
    }

    pub fn as_cell(&self) -> &AtomicCell {
        &self.cell
    }

    // not atomic
    pub fn init(&mut self, value: T) {
        unsafe { ptr::write(self.cell.as_ptr() as *mut T, value) }
    }

    pub fn get_mut(&mut self) -> &mut T {
        unsafe { &mut *(self.cell.as_ptr() as *mut T) }
    }

    pub fn into_inner(mut self) -> T {
        *self.get_mut()
    }

    pub fn load(&self) -> T {
        Selected::load(self.as_raw())
    }

    pub fn store(&self, value: T) {
        Selected::store(self.as_raw(), value)
    }

    pub fn add(&self, value: T) -> T {
        Selected::fetch_add(self.as_raw(), value)
    }

    pub fn sub(&self, value: T) -> T {
        Selected::fetch_sub(self.as_raw(), value)
    }

    pub fn or(&self, value: T) -> T {
        Selected::fetch_or(self.as_raw(), value)
    }

    pub fn xor(&self, value: T) -> T {
        Selected::fetch_xor(self.as_raw(), value)
    }

    pub fn and(&self, value: T) -> T {
        Selected::fetch_and(self.as_raw(), value)
    }

    pub fn exchange(&self, value: T) -> T {
        Selected::exchange(self.as_raw(), value)
    }

    /// Strong compare-and-exchange. On failure `*expected` is overwritten
    /// with the value the cell held.
    pub fn compare_exchange(&self, expected: &mut T, desired: T) -> bool {
        Selected::compare_exchange(self.as_raw(), expected, desired)
    }

    pub(crate) fn as_raw(&self) -> &T::Repr {
        unsafe {
            let v = self.cell.as_ptr() as *const T::Repr;
            &*v
        }
    }
}

impl<T: Word> Default for Atomic<T> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Word> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Word> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.load()).finish()
    }
}
