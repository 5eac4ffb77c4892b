use query::Sum;
use rand::{rngs::ThreadRng, Rng};
use union_find::UnionFind;

/// 成分番号を配列で持つ素朴な実装
struct Naive {
    label: Vec<usize>,
}

impl Naive {
    fn unite(&mut self, i: usize, j: usize) {
        let (from, to) = (self.label[j], self.label[i]);
        for l in self.label.iter_mut() {
            if *l == from {
                *l = to;
            }
        }
    }

    fn same(&self, i: usize, j: usize) -> bool {
        self.label[i] == self.label[j]
    }
}

fn union_find_test_once(rng: &mut ThreadRng) {
    let n = rng.gen_range(1..=200);
    let data = (0..n)
        .map(|_| rng.gen_range(-1000..=1000))
        .collect::<Vec<i64>>();
    let mut uf = UnionFind::with_values(data.clone(), Sum::new());
    let mut naive = Naive {
        label: (0..n).collect(),
    };
    for _ in 0..rng.gen_range(1..=500) {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if rng.gen_bool(0.5) {
            assert_eq!(uf.unite(i, j), !naive.same(i, j));
            naive.unite(i, j);
        } else {
            assert_eq!(uf.same(i, j), naive.same(i, j));
            let members = (0..n).filter(|&k| naive.same(i, k));
            assert_eq!(uf.size(i), members.clone().count());
            assert_eq!(*uf.value(i), members.map(|k| data[k]).sum::<i64>());
        }
    }
    let mut labels = naive.label.clone();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(uf.group_count(), labels.len());
}

#[test]
fn union_find_test() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        union_find_test_once(&mut rng);
    }
}
