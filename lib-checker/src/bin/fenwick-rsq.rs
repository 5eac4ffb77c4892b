//! AOJ DSL_2_B: Range Sum Query

use fenwick_tree::FenwickTree;
use proconio::{input, marker::Usize1};
use query::Sum;
use std::io::{BufWriter, Write};

fn main() {
    input! {
        n: usize,
        q: usize,
    }
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut ft = FenwickTree::new(n, Sum::<i64>::new());
    for _ in 0..q {
        input! {
            com: u8,
            x: Usize1,
            y: i64,
        }
        match com {
            0 => ft.add(x, &y),
            1 => writeln!(out, "{}", ft.sum(x..y as usize)).unwrap(),
            _ => unreachable!(),
        }
    }
}
