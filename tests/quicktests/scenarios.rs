use binary_tree::BinaryTree;

#[test]
fn listing_of_mixed_insertion_order() {
    let tree = BinaryTree::from([3, 1, 2, 5, 6, 4, 0]);

    assert_eq!(tree.size(), 7);
    assert_eq!(tree.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
}

#[test]
fn tree_string_of_mixed_insertion_order() {
    let tree = BinaryTree::from([3, 1, 2, 5, 6, 4, 0]);

    let expected = [
        "-~--~-  6",
        "-~-  5",
        "-~--~-  4",
        "  3",
        "-~--~-  2",
        "-~-  1",
        "-~--~-  0",
    ];
    assert_eq!(tree.as_tree_string().lines().collect::<Vec<_>>(), expected);
}

#[test]
fn removing_two_child_root_promotes_successor() {
    let mut tree = BinaryTree::from([5, 3, 8]);

    assert_eq!(tree.remove(5), Some(5));
    assert_eq!(tree.to_string(), "[3, 8]");
    assert_eq!(tree.size(), 2);
    // 8 is the new root: it's the only unindented line.
    assert_eq!(tree.as_tree_string(), "  8\n-~-  3\n");
}

#[test]
fn removing_missing_key() {
    let mut tree = BinaryTree::from([5, 3, 8]);

    assert_eq!(tree.remove(99), None);
    assert_eq!(tree.to_string(), "[3, 5, 8]");
    assert_eq!(tree.size(), 3);
}

#[test]
fn duplicates_are_rejected() {
    let mut tree = BinaryTree::new();
    tree.add_all([1, 2, 3]);
    let before = tree.as_tree_string();

    assert!(!tree.add(2));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.as_tree_string(), before);
}

#[test]
fn size_tracks_successful_calls() {
    let mut tree = BinaryTree::new();
    let mut expected = 0;

    for key in [4, 2, 6, 2, 1, 7, 4] {
        if tree.add(key) {
            expected += 1;
        }
    }
    for key in [2, 9, 4, 2] {
        if tree.remove(key).is_some() {
            expected -= 1;
        }
    }

    assert_eq!(tree.size(), expected);
    assert_eq!(tree.to_string(), "[1, 6, 7]");
}

#[test]
fn ascending_insertion_degenerates() {
    let tree: BinaryTree = (1..=100).collect();

    assert_eq!(tree.size(), 100);
    assert_eq!(tree.height(), 100);
    assert!(tree.iter().eq(1..=100));
}

#[test]
fn display_parses_back() {
    let tree = BinaryTree::from([9, -3, 12, 0]);
    let parsed: BinaryTree = tree.to_string().parse().unwrap();

    assert_eq!(parsed.to_string(), tree.to_string());
    assert_eq!(parsed.size(), tree.size());
}
