use rand::prelude::*;
use ringlist::LineQueue;

fn queue_of(lines: &[String]) -> LineQueue {
    let mut queue = LineQueue::with_capacity(lines.len().max(1));
    for line in lines {
        queue.push_line(line).unwrap();
    }
    queue
}

#[test]
fn sorts_the_classic_scenario() {
    let mut queue = LineQueue::with_capacity(4);
    for line in ["banana\n", "apple\n", "cherry\n"] {
        queue.push_line(line).unwrap();
    }

    queue.sort();

    let got: Vec<&str> = queue.lines().collect();
    assert_eq!(got, ["apple\n", "banana\n", "cherry\n"]);
}

#[test]
fn duplicate_keys_sort_together() {
    let mut queue = LineQueue::with_capacity(4);
    for line in ["b\n", "a\n", "a\n"] {
        queue.push_line(line).unwrap();
    }

    queue.sort();

    let got: Vec<&str> = queue.lines().collect();
    assert_eq!(got, ["a\n", "a\n", "b\n"]);
}

#[test]
fn random_lines_match_vec_sort() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let n = rng.gen_range(0..300);
        let input: Vec<String> = (0..n)
            .map(|_| {
                let len = rng.gen_range(0..6);
                let mut s: String = (0..len)
                    .map(|_| (b'a' + rng.gen_range(0..4)) as char)
                    .collect();
                s.push('\n');
                s
            })
            .collect();

        let mut queue = queue_of(&input);
        queue.sort();

        let mut expect = input;
        expect.sort();
        let got: Vec<&str> = queue.lines().collect();
        assert_eq!(got, expect);
        assert!(queue.is_sorted());
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut rng = rand::thread_rng();
    let input: Vec<String> = (0..100)
        .map(|_| format!("{}\n", rng.gen_range(0..50)))
        .collect();

    let mut queue = queue_of(&input);
    queue.sort();
    let once: Vec<String> = queue.lines().map(str::to_owned).collect();

    queue.sort();
    let twice: Vec<&str> = queue.lines().collect();
    assert_eq!(twice, once);
}

#[test]
fn multiset_is_preserved() {
    let mut rng = rand::thread_rng();
    let input: Vec<String> = (0..200)
        .map(|_| format!("{}\n", rng.gen_range(0..10)))
        .collect();

    let mut queue = queue_of(&input);
    queue.sort();

    let mut got: Vec<String> = queue.lines().map(str::to_owned).collect();
    let mut expect = input;
    got.sort();
    expect.sort();
    assert_eq!(got, expect);
}
