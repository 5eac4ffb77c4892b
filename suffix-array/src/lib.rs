use std::ops::Deref;

/// 接尾辞配列。`self[k]`は辞書順で`k`番目の接尾辞の開始位置。空の接尾辞は含めない。
#[derive(Debug, Clone)]
pub struct SuffixArray<'a, T> {
    data: &'a [T],
    array: Vec<usize>,
}

impl<'a, T> Deref for SuffixArray<'a, T> {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.array
    }
}

impl<'a, T: Ord> SuffixArray<'a, T> {
    /// 接尾辞をそのまま比較してソートする。O(n^2 log(n))
    pub fn new_simple(data: &'a [T]) -> Self {
        let mut array = (0..data.len()).collect::<Vec<_>>();
        array.sort_unstable_by(|&i, &j| data[i..].cmp(&data[j..]));
        Self { data, array }
    }

    /// ダブリングで構築する。O(n log^2(n))
    pub fn new(data: &'a [T]) -> Self {
        let n = data.len();
        let mut array = (0..n).collect::<Vec<_>>();
        array.sort_unstable_by(|&i, &j| data[i].cmp(&data[j]));
        let mut rank = vec![0; n];
        for w in 1..n {
            rank[array[w]] = rank[array[w - 1]] + usize::from(data[array[w - 1]] < data[array[w]]);
        }
        let mut tmp = vec![0; n];
        let mut k = 1;
        while k < n {
            // 後半が存在しない接尾辞は、前半が等しいどの接尾辞よりも小さい。
            let key = |i: usize| (rank[i], rank.get(i + k).map_or(0, |&r| r + 1));
            array.sort_unstable_by_key(|&i| key(i));
            tmp[array[0]] = 0;
            for w in 1..n {
                tmp[array[w]] = tmp[array[w - 1]] + usize::from(key(array[w - 1]) < key(array[w]));
            }
            std::mem::swap(&mut rank, &mut tmp);
            if rank[array[n - 1]] == n - 1 {
                break;
            }
            k *= 2;
        }
        Self { data, array }
    }

    pub fn suffix(&self, k: usize) -> &'a [T] {
        &self.data[self.array[k]..]
    }

    /// `pattern`が部分列として現れるか。O(|pattern| log(n))
    pub fn contains(&self, pattern: &[T]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let k = self
            .array
            .partition_point(|&i| &self.data[i..] < pattern);
        k < self.array.len() && self.data[self.array[k]..].starts_with(pattern)
    }
}
