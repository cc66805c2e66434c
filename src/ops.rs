use crate::{atomic::Atomic, flag::AtomicFlag, word::Word};

pub fn init<T: Word>(atomic: &mut Atomic<T>, value: T) {
    atomic.init(value)
}

pub fn load<T: Word>(atomic: &Atomic<T>) -> T {
    atomic.load()
}

pub fn store<T: Word>(atomic: &Atomic<T>, value: T) {
    atomic.store(value)
}

pub fn add<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.add(value)
}

pub fn sub<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.sub(value)
}

pub fn or<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.or(value)
}

pub fn xor<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.xor(value)
}

pub fn and<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.and(value)
}

pub fn exchange<T: Word>(atomic: &Atomic<T>, value: T) -> T {
    atomic.exchange(value)
}

pub fn compare_exchange<T: Word>(atomic: &Atomic<T>, expected: &mut T, desired: T) -> bool {
    atomic.compare_exchange(expected, desired)
}

pub fn flag_init(flag: &mut AtomicFlag) {
    flag.init()
}

pub fn flag_load(flag: &AtomicFlag) -> bool {
    flag.load()
}

pub fn test_and_set(flag: &AtomicFlag) -> bool {
    flag.test_and_set()
}

pub fn clear(flag: &AtomicFlag) {
    flag.clear()
}
