// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Uniform sampling without replacement

use rand::Rng;

/// Select `min(k, items.len())` distinct items uniformly at random.
///
/// Runs a partial Fisher-Yates shuffle over an index vector, so the input
/// slice is never reordered and every k-subset (in every order) is equally
/// likely.
pub fn sample_distinct<'a, T, R>(items: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let k = k.min(items.len());
    let mut indices: Vec<usize> = (0..items.len()).collect();

    for i in 0..k {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }

    indices[..k].iter().map(|&i| &items[i]).collect()
}
