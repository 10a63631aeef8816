//! Property-based tests for the registry

#[cfg(test)]
mod proptest_tests {
    use crate::{CapacityPolicy, Registry, Release};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Remove(usize, bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..8).prop_map(Op::Add),
            (0usize..8, any::<bool>()).prop_map(|(i, release)| Op::Remove(i, release)),
        ]
    }

    fn policy() -> impl Strategy<Value = CapacityPolicy> {
        prop_oneof![
            (0usize..6).prop_map(CapacityPolicy::Fixed),
            (1usize..4).prop_map(|initial| CapacityPolicy::Growable { initial }),
        ]
    }

    proptest! {
        #[test]
        fn test_release_all_runs_each_live_action_once(
            policy in policy(),
            ops in prop::collection::vec(op(), 0..40)
        ) {
            let handles: Vec<Rc<usize>> = (0..8).map(Rc::new).collect();
            let counts: Vec<Rc<Cell<usize>>> = (0..8).map(|_| Rc::new(Cell::new(0))).collect();
            let mut reclaimed = Vec::new();
            let mut registry = Registry::with_policy(policy).unwrap();

            for op in &ops {
                match *op {
                    Op::Add(i) => {
                        let count = Rc::clone(&counts[i]);
                        let before = registry.len();
                        let was_tracked = registry.contains(&handles[i]);
                        let result = registry.add(
                            Rc::clone(&handles[i]),
                            Release::with(move |_| count.set(count.get() + 1)),
                        );
                        match result {
                            Ok(_) if was_tracked => {
                                prop_assert_eq!(registry.len(), before);
                            }
                            Ok(_) => {
                                prop_assert_eq!(registry.len(), before + 1);
                            }
                            Err(rejected) => {
                                prop_assert!(!policy.is_growable());
                                prop_assert_eq!(registry.len(), before);
                                let (_, handle, _) = rejected.into_parts();
                                drop(handle);
                            }
                        }
                    }
                    Op::Remove(i, release) => {
                        if let Some(handle) = registry.remove(&handles[i], release) {
                            reclaimed.push(handle);
                        }
                        prop_assert!(!registry.contains(&handles[i]));
                    }
                }

                let occupied = registry.iter().count();
                prop_assert_eq!(registry.len(), occupied);
                prop_assert!(registry.len() <= registry.capacity());
                if let CapacityPolicy::Fixed(capacity) = policy {
                    prop_assert_eq!(registry.capacity(), capacity);
                }
            }

            let live: Vec<bool> = handles.iter().map(|h| registry.contains(h)).collect();
            let before: Vec<usize> = counts.iter().map(|c| c.get()).collect();
            registry.release_all();

            for i in 0..8 {
                let expected = before[i] + usize::from(live[i]);
                prop_assert_eq!(counts[i].get(), expected);
            }
        }

        #[test]
        fn test_growable_keeps_every_distinct_handle(
            initial in 1usize..5,
            extra in 1usize..12
        ) {
            let total = initial + extra;
            let handles: Vec<Rc<usize>> = (0..total).map(Rc::new).collect();
            let mut registry = Registry::with_policy(CapacityPolicy::Growable { initial }).unwrap();

            for handle in &handles {
                prop_assert!(registry.add(Rc::clone(handle), Release::dealloc()).is_ok());
            }

            prop_assert_eq!(registry.len(), total);
            prop_assert!(registry.capacity() >= 2 * initial);
            prop_assert!(handles.iter().all(|h| registry.contains(h)));
        }
    }
}
