//! Shared read access: concurrent readers construct each value at most once.

mod common;

use std::sync::Arc;
use std::thread;

use codec::segments::NteSegment;
use common::{context, CountingInstantiator};

#[test]
fn test_concurrent_readers_materialize_once() {
    let counter = Arc::new(CountingInstantiator::default());
    let mut nte = NteSegment::new(context(), counter.clone());
    for line in 0..16 {
        nte.append_raw(3, format!("line {line}")).unwrap();
    }

    let nte = Arc::new(nte);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let nte = Arc::clone(&nte);
            thread::spawn(move || {
                let mut seen = Vec::new();
                for repetition in (0..16).rev() {
                    let value = nte.comment(repetition).unwrap();
                    seen.push((value as *const _ as *const u8 as usize, value.encode()));
                }
                seen
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(counter.calls(), 16);
    for seen in &results[1..] {
        assert_eq!(seen, &results[0]);
    }
}

#[test]
fn test_materialize_all_then_share() {
    let counter = Arc::new(CountingInstantiator::default());
    let mut nte = NteSegment::new(context(), counter.clone());
    nte.populate(vec![vec!["1"], vec!["P"], vec!["a", "b", "c"]])
        .unwrap();

    assert_eq!(nte.materialize_all(), Ok(5));
    assert_eq!(nte.materialize_all(), Ok(0));

    let nte = Arc::new(nte);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(nte.comment_all().unwrap().len(), 3);
            });
        }
    });
    assert_eq!(counter.calls(), 5);
}
