//! AOJ 2444: Substring

use proconio::{input, marker::Bytes};
use rolling_hash::RollingHasher;
use std::collections::HashSet;

const BASE: u64 = 1_000_000_007;

fn main() {
    input! {
        _n: usize,
        m: usize,
        s: Bytes,
        queries: [String; m],
    }
    let rh = RollingHasher::from_bytes(BASE, &s);
    let (mut l, mut r) = (0, 1);
    let mut hashes = HashSet::new();
    for q in &queries {
        match q.as_str() {
            "L++" => l += 1,
            "L--" => l -= 1,
            "R++" => r += 1,
            "R--" => r -= 1,
            _ => unreachable!(),
        }
        hashes.insert(rh.hash(l..r));
    }
    println!("{}", hashes.len());
}
