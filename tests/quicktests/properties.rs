use binary_tree::BinaryTree;

use std::collections::BTreeSet;

use quickcheck::quickcheck;

quickcheck! {
    fn listing_is_sorted_unique_keys(xs: Vec<i32>) -> bool {
        let tree: BinaryTree = xs.iter().copied().collect();
        let expected: BTreeSet<i32> = xs.into_iter().collect();

        tree.size() == expected.len() && tree.iter().eq(expected.into_iter())
    }

    fn remove_reports_removed_key(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: BinaryTree = xs.iter().map(|x| i32::from(*x)).collect();
        let size = tree.size();
        let was_present = tree.contains(i32::from(key));

        let removed = tree.remove(i32::from(key));

        if was_present {
            removed == Some(i32::from(key))
                && tree.size() == size - 1
                && !tree.contains(i32::from(key))
                && tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a < b)
        } else {
            removed.is_none() && tree.size() == size
        }
    }

    fn missing_remove_leaves_tree_unchanged(xs: Vec<i8>) -> bool {
        // i8 keys never reach 1000.
        let mut tree: BinaryTree = xs.iter().map(|x| i32::from(*x)).collect();
        let before = tree.clone();

        tree.remove(1000).is_none() && tree == before && tree.to_string() == before.to_string()
    }

    fn display_round_trips(xs: Vec<i32>) -> bool {
        let tree: BinaryTree = xs.iter().copied().collect();

        tree.to_string().parse::<BinaryTree>().map(|t| t.to_string()) == Ok(tree.to_string())
    }
}
