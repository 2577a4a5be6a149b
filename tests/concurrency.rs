//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use pretty_assertions::assert_eq;
use rangeview::{OwnedView, SizedView, Source, View, views};
use std::collections::LinkedList;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_drop_view_over_list() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let list: LinkedList<i32> = (0..100).collect();
    let view = &list.view().drop(2);
    let expected: Vec<i32> = (2..100).collect();

    let results: Vec<Vec<i32>> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || view.cursor().copied().collect::<Vec<i32>>()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn test_shared_filter_pipeline() {
    let vec: Vec<u64> = (1..=1000).collect();
    let view = vec.view().filter(|x| **x % 7 == 0).transform(|x| x * 2);

    let sums: Vec<u64> = thread::scope(|s| {
        let a = s.spawn(|| view.cursor().sum::<u64>());
        let b = s.spawn(|| view.cursor().sum::<u64>());
        vec![a.join().unwrap(), b.join().unwrap()]
    });

    let expected: u64 = (1..=1000_u64).filter(|x| x % 7 == 0).map(|x| x * 2).sum();
    assert_eq!(sums, vec![expected, expected]);
}

#[test]
fn test_owned_view_moves_into_threads() {
    let view: OwnedView<String> = ["alpha", "beta", "gamma", "delta"]
        .into_iter()
        .map(String::from)
        .collect();
    let shared = Arc::new(view.clone().drop(1));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.cursor().map(|s| s.len()).sum::<usize>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 14);
    }
    assert_eq!(view.size(), 4);
}

#[test]
fn test_zip_counter_in_threads() {
    let names = vec!["a", "b", "c"];
    let view = views::zip(views::iota(1_usize), &names);
    thread::scope(|s| {
        for _ in 0..2 {
            s.spawn(|| {
                let numbered: Vec<(usize, &&str)> = view.cursor().collect();
                assert_eq!(numbered, vec![(1, &"a"), (2, &"b"), (3, &"c")]);
            });
        }
    });
}
