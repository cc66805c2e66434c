use super::{Backend, RawAtomic};
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) struct StdAtomics;

impl Backend for StdAtomics {
    #[inline]
    fn load<A: RawAtomic>(atomic: &A) -> A::Value {
        atomic.load()
    }

    #[inline]
    fn store<A: RawAtomic>(atomic: &A, value: A::Value) {
        atomic.store(value)
    }

    #[inline]
    fn fetch_add<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_add(value)
    }

    #[inline]
    fn fetch_sub<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_sub(value)
    }

    #[inline]
    fn fetch_or<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_or(value)
    }

    #[inline]
    fn fetch_xor<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_xor(value)
    }

    #[inline]
    fn fetch_and<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_and(value)
    }

    #[inline]
    fn exchange<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        atomic.swap(value)
    }

    #[inline]
    fn compare_exchange<A: RawAtomic>(
        atomic: &A,
        expected: &mut A::Value,
        desired: A::Value,
    ) -> bool {
        match atomic.compare_exchange(*expected, desired) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            },
        }
    }

    #[inline]
    fn flag_load(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }

    #[inline]
    fn test_and_set(flag: &AtomicBool) -> bool {
        flag.swap(true, Ordering::SeqCst)
    }

    #[inline]
    fn clear(flag: &AtomicBool) {
        flag.store(false, Ordering::SeqCst)
    }
}
