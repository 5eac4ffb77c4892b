//! AOJ ALDS1_14_D: Multiple String Matching

use proconio::{input, marker::Bytes};
use std::io::{BufWriter, Write};
use suffix_array::SuffixArray;

fn main() {
    input! {
        t: Bytes,
        q: usize,
        patterns: [Bytes; q],
    }
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let suffix_array = SuffixArray::new(&t[..]);
    for p in &patterns {
        writeln!(out, "{}", u8::from(suffix_array.contains(p))).unwrap();
    }
}
