//! All subsets of a slice by backtracking.

/// Every subset of `values`, preserving element order within each subset.
///
/// Subsets come out in depth-first order of the choice tree: for `[1, 2, 3]`
/// that is `[]`, `[1]`, `[1, 2]`, `[1, 2, 3]`, `[1, 3]`, `[2]`, `[2, 3]`, `[3]`.
/// Duplicate input values are treated as distinct positions.
pub fn subsets(values: &[i32]) -> Vec<Vec<i32>> {
    let mut all = Vec::new();
    let mut current = Vec::with_capacity(values.len());
    backtrack(values, 0, &mut current, &mut all);
    all
}

fn backtrack(values: &[i32], start: usize, current: &mut Vec<i32>, all: &mut Vec<Vec<i32>>) {
    all.push(current.clone());
    for i in start..values.len() {
        current.push(values[i]);
        backtrack(values, i + 1, current, all);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_one_subset() {
        assert_eq!(subsets(&[]), vec![Vec::<i32>::new()]);
    }
}
