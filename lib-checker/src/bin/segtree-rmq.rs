//! AOJ DSL_2_A: Range Minimum Query

use proconio::input;
use query::Min;
use segtree::Segtree;
use std::io::{BufWriter, Write};

fn main() {
    input! {
        n: usize,
        q: usize,
    }
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut segtree = Segtree::from_elem(n, (1i64 << 31) - 1, Min::new());
    for _ in 0..q {
        input! {
            com: u8,
            x: usize,
            y: i64,
        }
        match com {
            0 => segtree.update(x, y),
            1 => writeln!(out, "{}", segtree.query(x..=y as usize)).unwrap(),
            _ => unreachable!(),
        }
    }
}
