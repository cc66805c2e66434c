use seqcst_atomics::{ops, AtomicFlag, AtomicPtrInt};
use std::mem;

fn main() {
    let mut flag = AtomicFlag::new();
    ops::flag_init(&mut flag);
    println!("The init value is: {}", ops::flag_load(&flag) as i32);
    println!("flag alignment is: {}", mem::align_of_val(&flag));

    println!("flag value is: {}", ops::test_and_set(&flag) as i32);
    println!("flag value is: {}", ops::test_and_set(&flag) as i32);

    ops::clear(&flag);
    println!("flag value is: {}", ops::test_and_set(&flag) as i32);

    println!("----------------");

    let mut atomic = AtomicPtrInt::zeroed();

    ops::init(&mut atomic, 100);
    println!("The init value is: {}", ops::load(&atomic));
    ops::store(&atomic, 10000);
    println!("The stored value is: {}", ops::load(&atomic));

    let old = ops::add(&atomic, 5000);
    println!(
        "The old value is: {}, the new value is: {}",
        old,
        ops::load(&atomic)
    );

    println!("----------------");

    ops::store(&atomic, 0x0055);
    let old = ops::xor(&atomic, 0x00aa);
    println!(
        "The old value is: 0x{:04X}, the new value is: 0x{:04X}",
        old,
        ops::load(&atomic)
    );

    println!("----------------");

    let old = ops::exchange(&atomic, 1000);
    println!(
        "old value is: {}, stored value is: {}",
        old,
        ops::load(&atomic)
    );

    println!("----------------");

    let mut value = ops::load(&atomic);
    if ops::compare_exchange(&atomic, &mut value, 50) {
        println!("CAS succeeded!");
    }

    value = 0;
    if !ops::compare_exchange(&atomic, &mut value, 10) {
        println!("CAS failed! expected value is: {}", value);
    }

    if ops::compare_exchange(&atomic, &mut value, 10) {
        println!(
            "CAS succeeded! value = {}, new value = {}",
            value,
            ops::load(&atomic)
        );
    }
}
