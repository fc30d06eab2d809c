use core::hint::black_box;

use collections::traceback::{self, Traceable};
use collections::{new_set, Set};

#[test]
fn set_to_vec() {
    let set = new_set([1, 2, 3]);

    let mut elements = set.to_vec();
    elements.sort_unstable();

    assert_eq!(elements, [1, 2, 3]);
}

#[test]
fn set_algebra() {
    let evens: Set<u32> = (0..10).filter(|n| n % 2 == 0).collect();
    let small = new_set(0..5);

    let mut both = evens.intersection(&small).to_vec();
    both.sort_unstable();
    assert_eq!(both, [0, 2, 4]);

    assert_eq!(evens.union(&small).len(), 7);
    assert_eq!(evens.symmetric_difference(&small), new_set([1, 3, 6, 8]));
}

#[test]
fn missing_element_is_traced() {
    fn lookup(set: &Set<&str>, name: &str) -> Result<(), traceback::Error> {
        if set.contains(&name) {
            Ok(())
        } else {
            Err(traceback::errorf!("{name:?} is not registered"))
        }
    }

    #[inline(never)]
    fn register(set: &Set<&str>) -> Result<(), traceback::Error> {
        black_box(lookup(set, "carol").wrap_err("registration failed"))
    }

    let users = new_set(["alice", "bob"]);
    let err = register(&users).unwrap_err();

    assert_eq!(err.to_string(), "registration failed: \"carol\" is not registered");
    assert!(err.frames().first().unwrap().function.ends_with("register"));

    let frames = traceback::frames_of(Some(&err));
    assert_eq!(&frames, err.frames());
}
