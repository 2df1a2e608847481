//! Shuffling, paging and prefix sampling over a pool.
//!
//! Every function takes the random source explicitly; handlers seed a
//! `StdRng` per request and tests pass fixed generators.

use rand::Rng;
use serde::Serialize;

/// Fisher-Yates shuffle of a copy of `pool`. Every permutation is equally
/// likely given a uniform `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = pool.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// One page of a larger listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice `items` to the 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);

    Page {
        items: items.into_iter().skip(start).take(page_size).collect(),
        total,
        page,
        page_size,
        total_pages: total_pages(total, page_size),
    }
}

/// Shuffle the whole pool, then cut out one page. Each call shuffles afresh,
/// so consecutive pages may overlap.
pub fn take_page<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    page: usize,
    page_size: usize,
    rng: &mut R,
) -> Page<T> {
    paginate(shuffle(pool, rng), page, page_size)
}

/// The first `count` elements of a fresh shuffle, or the whole pool if it is
/// smaller.
pub fn take_random<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = shuffle(pool, rng);
    shuffled.truncate(count);
    shuffled
}
