mod common;

use bintree_layout::tree::{complete_tree_height, complete_tree_leaf_count};
use bintree_layout::{BinaryTree, Direction, Order};
use common::{collect, masked};
use proptest::prelude::*;

/// Path from the root to complete-tree position `index`
fn path_to(index: usize) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut i = index;
    while i > 1 {
        path.push(if i % 2 == 0 { Direction::Left } else { Direction::Right });
        i /= 2;
    }
    path.reverse();
    path
}

proptest! {
    #[test]
    fn array_round_trip(elements in proptest::collection::vec(any::<i64>(), 1..200)) {
        let n = elements.len() - 1;
        let tree = BinaryTree::from_complete(&elements, n).expect("array holds n + 1 cells");

        let mut flat = vec![0i64; n + 1];
        let reached = tree.to_flat_array(&mut flat, n).expect("buffer holds n + 1 cells");
        prop_assert_eq!(reached, n);
        prop_assert_eq!(&flat[1..], &elements[1..]);
    }

    #[test]
    fn complete_tree_formulas(n in 0usize..512) {
        let elements: Vec<usize> = (0..=n).collect();
        let tree = BinaryTree::from_complete(&elements, n).expect("array holds n + 1 cells");

        let expected_height = if n == 0 { 0 } else { n.ilog2() as usize + 1 };
        prop_assert_eq!(tree.height(), expected_height);
        prop_assert_eq!(complete_tree_height(n), expected_height);
        prop_assert_eq!(tree.leaf_count(), if n == 0 { 0 } else { 1 + (n - 1) / 2 });
        prop_assert_eq!(complete_tree_leaf_count(n), tree.leaf_count());
        prop_assert_eq!(tree.node_count(), n);
    }

    #[test]
    fn clone_of_any_shape_is_equal_and_independent(
        mask in proptest::collection::vec(any::<bool>(), 1..63),
        pick in any::<prop::sample::Index>(),
    ) {
        let source = masked(&mask);
        let mut copy = source.clone();
        prop_assert_eq!(&copy, &source);
        prop_assert_eq!(copy.node_count(), source.node_count());
        prop_assert_eq!(collect(&copy, Order::Preorder), collect(&source, Order::Preorder));

        let present: Vec<usize> = collect(&source, Order::Preorder);
        if !present.is_empty() {
            let index = present[pick.index(present.len())];
            let path = path_to(index);
            *copy.node_at_mut(&path).expect("position exists").element_mut() = usize::MAX;

            prop_assert_ne!(&copy, &source);
            prop_assert_eq!(source.node_at(&path).map(|n| *n.element()), Some(index));
        }
    }

    #[test]
    fn flatten_places_every_node_at_its_position(mask in proptest::collection::vec(any::<bool>(), 1..63)) {
        let tree = masked(&mask);
        let cells = tree.to_complete_vec(tree.max_index());
        prop_assert_eq!(cells.len(), tree.max_index() + 1);
        for (index, cell) in cells.iter().enumerate() {
            if let Some(element) = cell {
                prop_assert_eq!(*element, index);
            }
        }
        prop_assert_eq!(cells.iter().flatten().count(), tree.node_count());
    }

    #[test]
    fn bounded_complete_vec_is_a_prefix(mask in proptest::collection::vec(any::<bool>(), 1..63), max in 0usize..70) {
        let tree = masked(&mask);
        let full = tree.to_complete_vec(tree.max_index());
        let bounded = tree.to_complete_vec(max);
        prop_assert!(bounded.len() <= max + 1);
        prop_assert_eq!(&bounded[..], &full[..bounded.len()]);
        for (index, cell) in full.iter().enumerate().skip(bounded.len()) {
            prop_assert!(cell.is_none() || index > max);
        }
    }
}
