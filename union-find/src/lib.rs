use query::{Commutative, Noop};
use util::bounds;

/// 各連結成分にモノイドの値を持たせられるUnion-Find。
///
/// 併合は成分の大きさで行い、値は`op.combine`で畳み込む。畳み込む順序は決まらないので、
/// `op`には可換性を要求する。
#[derive(Debug, Clone)]
pub struct UnionFind<T, OP> {
    uf: Vec<usize>,
    size: Vec<usize>,
    query: Vec<T>,
    groups: usize,
    op: OP,
}

impl UnionFind<(), Noop> {
    pub fn new(len: usize) -> Self {
        Self::with_values(vec![(); len], Noop)
    }
}

impl<T, OP> UnionFind<T, OP> {
    pub fn len(&self) -> usize {
        self.uf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 連結成分の個数
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// 経路圧縮をしない`find`
    #[track_caller]
    pub fn find(&self, mut i: usize) -> usize {
        bounds::check_index(i, self.len());
        let mut p = self.uf[i];
        while p != i {
            i = p;
            p = self.uf[i];
        }
        p
    }

    #[track_caller]
    pub fn find_rc(&mut self, i: usize) -> usize {
        let root = self.find(i);
        let mut i = i;
        while self.uf[i] != root {
            let next = self.uf[i];
            self.uf[i] = root;
            i = next;
        }
        root
    }

    #[track_caller]
    pub fn same(&mut self, i: usize, j: usize) -> bool {
        self.find_rc(i) == self.find_rc(j)
    }

    #[track_caller]
    pub fn size(&self, i: usize) -> usize {
        self.size[self.find(i)]
    }

    #[track_caller]
    pub fn size_rc(&mut self, i: usize) -> usize {
        let root = self.find_rc(i);
        self.size[root]
    }

    /// `i`を含む成分の値を畳み込んだもの
    #[track_caller]
    pub fn value(&self, i: usize) -> &T {
        &self.query[self.find(i)]
    }

    #[track_caller]
    pub fn value_rc(&mut self, i: usize) -> &T {
        let root = self.find_rc(i);
        &self.query[root]
    }
}

impl<T, OP: Commutative<Element = T>> UnionFind<T, OP> {
    pub fn with_values(data: Vec<T>, op: OP) -> Self {
        let len = data.len();
        Self {
            uf: (0..len).collect(),
            size: vec![1; len],
            query: data,
            groups: len,
            op,
        }
    }

    /// `i`と`j`の成分を併合する。すでに同じ成分なら`false`を返す。
    #[track_caller]
    pub fn unite(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find_rc(i);
        let root_j = self.find_rc(j);
        if root_i == root_j {
            return false;
        }
        let (parent, child) = if self.size[root_i] >= self.size[root_j] {
            (root_i, root_j)
        } else {
            (root_j, root_i)
        };
        self.uf[child] = parent;
        self.size[parent] += self.size[child];
        let child_val = std::mem::replace(&mut self.query[child], self.op.identity());
        self.op
            .combine_assign_left(&mut self.query[parent], &child_val);
        self.groups -= 1;
        true
    }
}
