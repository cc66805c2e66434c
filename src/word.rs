use crate::cell::AtomicCell;
use std::{
    fmt,
    mem::{align_of, size_of},
    os::raw::c_int,
    sync::atomic::{AtomicI32, AtomicI8, AtomicIsize},
};

#[cfg(target_has_atomic = "64")]
use std::sync::atomic::AtomicI64;

pub trait Word: sealed::Word + Copy + Eq + fmt::Debug + Send + Sync + 'static {}

pub(crate) mod sealed {
    use crate::backend::RawAtomic;

    pub trait Word: Copy + Eq {
        type Repr: RawAtomic<Value = Self>;
    }
}

macro_rules! impl_word {
    ($value:ty, $atomic:ty) => {
        impl sealed::Word for $value {
            type Repr = $atomic;
        }

        impl Word for $value {}

        const _: () = assert!(
            size_of::<$atomic>() <= AtomicCell::SIZE
                && align_of::<$atomic>() <= AtomicCell::ALIGN
        );
    };
}

impl_word!(i8, AtomicI8);
impl_word!(i32, AtomicI32);
#[cfg(target_has_atomic = "64")]
impl_word!(i64, AtomicI64);
impl_word!(isize, AtomicIsize);

// c_int is i32 on every target with a std atomic i32
const _: () = assert!(size_of::<c_int>() == size_of::<i32>());

