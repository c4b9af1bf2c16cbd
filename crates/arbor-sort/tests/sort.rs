use arbor_sort::{avl_tree_sort, direct_insertion_sort};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

#[test]
fn both_sorts_agree_with_the_standard_sort() {
    let values = vec![5, 3, 8, 1, 9, 2, 7, 4, 6];
    let mut expected = values.clone();
    expected.sort();

    assert_eq!(avl_tree_sort(&values), expected);
    assert_eq!(direct_insertion_sort(&values), expected);
}

#[test]
fn duplicates_collapse_in_the_tree_but_not_in_the_baseline() {
    let values = vec![3, 1, 3, 2, 1];

    assert_eq!(avl_tree_sort(&values), vec![1, 2, 3]);
    assert_eq!(direct_insertion_sort(&values), vec![1, 1, 2, 3, 3]);
}

#[test]
fn degenerate_inputs() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(avl_tree_sort(&empty), empty);
    assert_eq!(direct_insertion_sort(&empty), empty);

    assert_eq!(avl_tree_sort(&[42]), vec![42]);
    assert_eq!(direct_insertion_sort(&[42]), vec![42]);

    let sorted = vec![1, 2, 3, 4];
    assert_eq!(avl_tree_sort(&sorted), sorted);
    assert_eq!(direct_insertion_sort(&sorted), sorted);

    let reversed = vec![4, 3, 2, 1];
    assert_eq!(avl_tree_sort(&reversed), vec![1, 2, 3, 4]);
    assert_eq!(direct_insertion_sort(&reversed), vec![1, 2, 3, 4]);
}

#[test]
fn shuffled_input_comes_back_ordered() {
    let mut values: Vec<u32> = (0..500).collect();
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    values.shuffle(&mut rng);

    let expected: Vec<u32> = (0..500).collect();
    assert_eq!(avl_tree_sort(&values), expected);
    assert_eq!(direct_insertion_sort(&values), expected);
}
