use std::ops::RangeBounds;
use util::bounds;

const MODULO: u64 = (1 << 61) - 1;

/// `a * b mod 2^61 - 1`
fn mul_mod(a: u64, b: u64) -> u64 {
    let t = a as u128 * b as u128;
    let t = (t >> 61) as u64 + (t as u64 & MODULO);
    if t >= MODULO {
        t - MODULO
    } else {
        t
    }
}

fn add_mod(a: u64, b: u64) -> u64 {
    let t = a + b;
    if t >= MODULO {
        t - MODULO
    } else {
        t
    }
}

/// 法`2^61 - 1`のローリングハッシュ。
#[derive(Debug, Clone)]
pub struct RollingHasher {
    /// `powers[i] = base^i`
    powers: Vec<u64>,
    /// `hash[i]`は`data[..i]`のハッシュ
    hash: Vec<u64>,
}

impl RollingHasher {
    pub fn new(base: u64, data: impl IntoIterator<Item = u64>) -> Self {
        let base = base % MODULO;
        let mut hash = vec![0];
        let mut tmp = 0;
        for x in data {
            tmp = add_mod(mul_mod(tmp, base), x % MODULO);
            hash.push(tmp);
        }
        let mut e = 1;
        let powers = std::iter::once(1)
            .chain(std::iter::repeat_with(|| {
                e = mul_mod(e, base);
                e
            }))
            .take(hash.len())
            .collect();
        Self { powers, hash }
    }

    pub fn from_bytes(base: u64, data: &[u8]) -> Self {
        Self::new(base, data.iter().map(|&c| c as u64))
    }

    pub fn len(&self) -> usize {
        self.hash.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `range`の部分列のハッシュ。空区間は0。
    #[track_caller]
    pub fn hash(&self, range: impl RangeBounds<usize>) -> u64 {
        let (start, end) = bounds::resolve(range, self.len());
        let sub = mul_mod(self.hash[start], self.powers[end - start]);
        add_mod(self.hash[end], MODULO - sub)
    }

    /// 長さ`rhs_len`の列のハッシュ`rhs`を`lhs`の後ろに連結したもののハッシュ。
    #[track_caller]
    pub fn concat(&self, lhs: u64, rhs: u64, rhs_len: usize) -> u64 {
        bounds::check_end(rhs_len, self.len());
        add_mod(mul_mod(lhs, self.powers[rhs_len]), rhs)
    }
}
