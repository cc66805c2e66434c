use cfg_if::cfg_if;
#[cfg(target_has_atomic = "64")]
use std::sync::atomic::AtomicI64;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI8, AtomicIsize, Ordering};

#[cfg_attr(not(test), allow(dead_code))]
mod interlocked;
#[cfg_attr(not(test), allow(dead_code))]
mod std_atomics;

cfg_if! {
    if #[cfg(any(feature = "interlocked", target_env = "msvc"))] {
        pub(crate) type Selected = interlocked::Interlocked;
    } else {
        pub(crate) type Selected = std_atomics::StdAtomics;
    }
}

// all accesses are SeqCst
pub trait RawAtomic: Sync {
    type Value: Copy + Eq;

    fn load(&self) -> Self::Value;
    fn store(&self, value: Self::Value);
    fn swap(&self, value: Self::Value) -> Self::Value;
    fn compare_exchange(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Result<Self::Value, Self::Value>;
    fn fetch_add(&self, value: Self::Value) -> Self::Value;
    fn fetch_sub(&self, value: Self::Value) -> Self::Value;
    fn fetch_or(&self, value: Self::Value) -> Self::Value;
    fn fetch_xor(&self, value: Self::Value) -> Self::Value;
    fn fetch_and(&self, value: Self::Value) -> Self::Value;

    fn wrapping_add(a: Self::Value, b: Self::Value) -> Self::Value;
    fn wrapping_sub(a: Self::Value, b: Self::Value) -> Self::Value;
}

macro_rules! impl_raw_atomic {
    ($atomic:ty, $value:ty) => {
        impl RawAtomic for $atomic {
            type Value = $value;

            #[inline]
            fn load(&self) -> $value {
                <$atomic>::load(self, Ordering::SeqCst)
            }

            #[inline]
            fn store(&self, value: $value) {
                <$atomic>::store(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn swap(&self, value: $value) -> $value {
                <$atomic>::swap(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn compare_exchange(&self, current: $value, new: $value) -> Result<$value, $value> {
                <$atomic>::compare_exchange(
                    self,
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
            }

            #[inline]
            fn fetch_add(&self, value: $value) -> $value {
                <$atomic>::fetch_add(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_sub(&self, value: $value) -> $value {
                <$atomic>::fetch_sub(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_or(&self, value: $value) -> $value {
                <$atomic>::fetch_or(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_xor(&self, value: $value) -> $value {
                <$atomic>::fetch_xor(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_and(&self, value: $value) -> $value {
                <$atomic>::fetch_and(self, value, Ordering::SeqCst)
            }

            #[inline]
            fn wrapping_add(a: $value, b: $value) -> $value {
                a.wrapping_add(b)
            }

            #[inline]
            fn wrapping_sub(a: $value, b: $value) -> $value {
                a.wrapping_sub(b)
            }
        }
    };
}

impl_raw_atomic!(AtomicI8, i8);
impl_raw_atomic!(AtomicI32, i32);
#[cfg(target_has_atomic = "64")]
impl_raw_atomic!(AtomicI64, i64);
impl_raw_atomic!(AtomicIsize, isize);

pub(crate) trait Backend {
    fn load<A: RawAtomic>(atomic: &A) -> A::Value;
    fn store<A: RawAtomic>(atomic: &A, value: A::Value);
    fn fetch_add<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;
    fn fetch_sub<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;
    fn fetch_or<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;
    fn fetch_xor<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;
    fn fetch_and<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;
    fn exchange<A: RawAtomic>(atomic: &A, value: A::Value) -> A::Value;

    // strong; on failure `expected` receives the observed value
    fn compare_exchange<A: RawAtomic>(
        atomic: &A,
        expected: &mut A::Value,
        desired: A::Value,
    ) -> bool;

    fn flag_load(flag: &AtomicBool) -> bool;
    fn test_and_set(flag: &AtomicBool) -> bool;
    fn clear(flag: &AtomicBool);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crossbeam_utils::CachePadded;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use std::{fmt::Debug, sync::Arc};

    pub(crate) fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    pub(crate) trait Width: RawAtomic + Sized {
        const MIN: Self::Value;
        const MAX: Self::Value;
        const ONE: Self::Value;

        fn with(value: Self::Value) -> Self;
        fn random(rng: &mut SmallRng) -> Self::Value;
        fn or(a: Self::Value, b: Self::Value) -> Self::Value;
        fn xor(a: Self::Value, b: Self::Value) -> Self::Value;
        fn and(a: Self::Value, b: Self::Value) -> Self::Value;
    }

    macro_rules! impl_width {
        ($atomic:ty, $value:ty) => {
            impl Width for $atomic {
                const MIN: $value = <$value>::min_value();
                const MAX: $value = <$value>::max_value();
                const ONE: $value = 1;

                fn with(value: $value) -> Self {
                    <$atomic>::new(value)
                }

                fn random(rng: &mut SmallRng) -> $value {
                    rng.gen()
                }

                fn or(a: $value, b: $value) -> $value {
                    a | b
                }

                fn xor(a: $value, b: $value) -> $value {
                    a ^ b
                }

                fn and(a: $value, b: $value) -> $value {
                    a & b
                }
            }
        };
    }

    impl_width!(AtomicI8, i8);
    impl_width!(AtomicI32, i32);
    #[cfg(target_has_atomic = "64")]
    impl_width!(AtomicI64, i64);
    impl_width!(AtomicIsize, isize);

    macro_rules! every_width {
        ($check:ident, $backend:ty) => {
            $check::<$backend, AtomicI8>();
            $check::<$backend, AtomicI32>();
            #[cfg(target_has_atomic = "64")]
            $check::<$backend, AtomicI64>();
            $check::<$backend, AtomicIsize>();
        };
    }

    fn store_load<B: Backend, A: Width>()
    where
        A::Value: Debug,
    {
        let mut rng = rng();
        for _ in 0..64 {
            let atomic = A::with(A::random(&mut rng));
            let (v1, v2) = (A::random(&mut rng), A::random(&mut rng));
            B::store(&atomic, v1);
            assert_eq!(B::load(&atomic), v1);
            B::store(&atomic, v2);
            assert_eq!(B::load(&atomic), v2);
        }
    }

    fn rmw_pre_image<B: Backend, A: Width>()
    where
        A::Value: Debug,
    {
        let mut rng = rng();
        for _ in 0..64 {
            let (init, operand) = (A::random(&mut rng), A::random(&mut rng));

            let atomic = A::with(init);
            assert_eq!(B::fetch_add(&atomic, operand), init);
            assert_eq!(B::load(&atomic), A::wrapping_add(init, operand));

            let atomic = A::with(init);
            assert_eq!(B::fetch_sub(&atomic, operand), init);
            assert_eq!(B::load(&atomic), A::wrapping_sub(init, operand));

            let atomic = A::with(init);
            assert_eq!(B::fetch_or(&atomic, operand), init);
            assert_eq!(B::load(&atomic), A::or(init, operand));

            let atomic = A::with(init);
            assert_eq!(B::fetch_xor(&atomic, operand), init);
            assert_eq!(B::load(&atomic), A::xor(init, operand));

            let atomic = A::with(init);
            assert_eq!(B::fetch_and(&atomic, operand), init);
            assert_eq!(B::load(&atomic), A::and(init, operand));

            let atomic = A::with(init);
            assert_eq!(B::exchange(&atomic, operand), init);
            assert_eq!(B::load(&atomic), operand);
        }
    }

    fn wrapping<B: Backend, A: Width>()
    where
        A::Value: Debug,
    {
        let atomic = A::with(A::MAX);
        assert_eq!(B::fetch_add(&atomic, A::ONE), A::MAX);
        assert_eq!(B::load(&atomic), A::MIN);
        assert_eq!(B::fetch_sub(&atomic, A::ONE), A::MIN);
        assert_eq!(B::load(&atomic), A::MAX);
    }

    fn compare_exchange<B: Backend, A: Width>()
    where
        A::Value: Debug,
    {
        let mut rng = rng();
        for _ in 0..64 {
            let (init, desired) = (A::random(&mut rng), A::random(&mut rng));
            let atomic = A::with(init);

            let mut expected = init;
            assert!(B::compare_exchange(&atomic, &mut expected, desired));
            assert_eq!(expected, init);
            assert_eq!(B::load(&atomic), desired);

            let stale = A::xor(desired, A::ONE);
            let mut expected = stale;
            assert!(!B::compare_exchange(&atomic, &mut expected, init));
            assert_eq!(expected, desired);
            assert_eq!(B::load(&atomic), desired);

            assert!(B::compare_exchange(&atomic, &mut expected, stale));
            assert_eq!(B::load(&atomic), stale);
        }
    }

    pub(crate) fn check_store_load<B: Backend>() {
        every_width!(store_load, B);
    }

    pub(crate) fn check_rmw_pre_image<B: Backend>() {
        every_width!(rmw_pre_image, B);
    }

    pub(crate) fn check_wrapping<B: Backend>() {
        every_width!(wrapping, B);
    }

    pub(crate) fn check_compare_exchange<B: Backend>() {
        every_width!(compare_exchange, B);
    }

    pub(crate) fn check_flag<B: Backend>() {
        let flag = AtomicBool::new(false);
        assert!(!B::flag_load(&flag));
        assert!(!B::test_and_set(&flag));
        assert!(B::flag_load(&flag));
        assert!(B::test_and_set(&flag));
        B::clear(&flag);
        assert!(!B::flag_load(&flag));
        assert!(!B::test_and_set(&flag));
    }

    pub(crate) fn check_contended_add<B: Backend + 'static>() {
        let threads = 8;
        let per_thread = 1000;
        let counters = Arc::new([
            CachePadded::new(AtomicIsize::new(0)),
            CachePadded::new(AtomicIsize::new(0)),
        ]);
        let mut handles = Vec::with_capacity(threads);
        for _ in 0..threads {
            let counters = counters.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..per_thread {
                    B::fetch_add(&*counters[0], 1);
                    B::fetch_sub(&*counters[1], 1);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(B::load(&*counters[0]), (threads * per_thread) as isize);
        assert_eq!(B::load(&*counters[1]), -((threads * per_thread) as isize));
    }

    #[test]
    fn selected_backend_round_trips() {
        check_store_load::<Selected>();
        check_compare_exchange::<Selected>();
        check_flag::<Selected>();
    }
}
