//! AOJ DSL_1_A: Disjoint Set: Union Find Tree

use proconio::input;
use std::io::{BufWriter, Write};
use union_find::UnionFind;

fn main() {
    input! {
        n: usize,
        q: usize,
    }
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut uf = UnionFind::new(n);
    for _ in 0..q {
        input! {
            t: u8,
            u: usize,
            v: usize,
        }
        match t {
            0 => {
                uf.unite(u, v);
            }
            1 => writeln!(out, "{}", u8::from(uf.same(u, v))).unwrap(),
            _ => unreachable!(),
        }
    }
}
