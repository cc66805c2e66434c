use super::{Backend, RawAtomic};
use crossbeam_utils::Backoff;
use log::trace;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) struct Interlocked;

impl Interlocked {
    // no native fetch-and-add here
    fn update<A, F>(atomic: &A, f: F) -> A::Value
    where
        A: RawAtomic,
        F: Fn(A::Value) -> A::Value,
    {
        let backoff = Backoff::new();
        let mut current = atomic.load();
        let mut snoozing = false;
        loop {
            match atomic.compare_exchange(current, f(current)) {
                Ok(prev) => return prev,
                Err(actual) => {
                    current = actual;
                    if backoff.is_completed() {
                        if !snoozing {
                            snoozing = true;
                            trace!("compare-and-exchange loop contended, snoozing between attempts");
                        }
                        backoff.snooze();
                    } else {
                        backoff.spin();
                    }
                },
            }
        }
    }
}

impl Backend for Interlocked {
    #[inline]
    fn load<A: RawAtomic>(atomic: &A) -> A::Value {
        atomic.load()
    }

    #[inline]
    fn store<A: RawAtomic>(atomic: &A, value: A::Value) {
        atomic.swap(value);
    }

    fn fetch_add<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        Self::update(atomic, |current| A::wrapping_add(current, value))
    }

    fn fetch_sub<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value {
        Self::update(atomic, |current| A::wrapping_sub(current, value))
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
        let observed = match atomic.compare_exchange(*expected, desired) {
            Ok(prev) => prev,
            Err(actual) => actual,
        };
        let swapped = observed == *expected;
        if !swapped {
            *expected = observed;
        }
        swapped
    }

    #[inline]
    fn flag_load(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }

    #[inline]
    fn test_and_set(flag: &AtomicBool) -> bool {
        flag.fetch_or(true, Ordering::SeqCst)
    }

    #[inline]
    fn clear(flag: &AtomicBool) {
        flag.swap(false, Ordering::SeqCst);
    }
}
