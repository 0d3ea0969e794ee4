//! Checks for the `order_index` contract on modules and lessons.

/// True when the indices, taken in any order, are exactly `0..n` or `1..=n`
/// with no gaps and no duplicates. An empty set is trivially consecutive.
pub fn is_consecutive<I>(indices: I) -> bool
where
    I: IntoIterator<Item = u32>,
{
    let mut sorted: Vec<u32> = indices.into_iter().collect();
    sorted.sort_unstable();

    let Some(&first) = sorted.first() else {
        return true;
    };
    if first > 1 {
        return false;
    }

    sorted.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![0, 1, 2], true)]
    #[case(vec![3, 1, 2], true)]
    #[case(vec![1, 2, 2], false)]
    #[case(vec![1, 3], false)]
    #[case(vec![2, 3, 4], false)]
    fn consecutive_cases(#[case] indices: Vec<u32>, #[case] expected: bool) {
        assert_eq!(is_consecutive(indices), expected);
    }
}
