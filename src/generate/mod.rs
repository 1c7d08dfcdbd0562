//! Random tree generation
//!
//! Generators draw node values from a shuffled permutation of
//! `0..2^(height + 1) - 1`, so every value is distinct and the value range
//! matches the node count of a perfect tree of that height.
//!
//! Non-perfect shapes stop once a random number of leaves has reached the
//! full depth. That target is the sum of two uniform rolls, which centers the
//! leaf count around half of the maximum. Every generated tree has exactly
//! the requested height.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::node::{Node, NodeParts, Side};
use crate::TreeError;

/// Largest supported generator height
pub const MAX_HEIGHT: usize = 9;

/// Shape parameters shared by the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Exact height of the generated tree (`0..=MAX_HEIGHT`)
    pub height: usize,
    /// Fill every level completely
    pub is_perfect: bool,
    /// Heaps only: max-heap when set, min-heap otherwise
    pub is_max: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            height: 3,
            is_perfect: false,
            is_max: true,
        }
    }
}

impl GeneratorConfig {
    /// Configuration for the given height
    pub fn new(height: usize) -> Result<Self, TreeError> {
        if height > MAX_HEIGHT {
            return Err(TreeError::InvalidHeight {
                height,
                max: MAX_HEIGHT,
            });
        }
        Ok(Self {
            height,
            ..Self::default()
        })
    }

    /// Request a perfect tree
    pub fn with_perfect(mut self, is_perfect: bool) -> Self {
        self.is_perfect = is_perfect;
        self
    }

    /// Choose between max-heap and min-heap
    pub fn with_max(mut self, is_max: bool) -> Self {
        self.is_max = is_max;
        self
    }

    fn max_node_count(&self) -> usize {
        (1 << (self.height + 1)) - 1
    }
}

/// Random binary tree of the configured height
pub fn random_tree(config: &GeneratorConfig, rng: &mut impl Rng) -> Node<i64> {
    debug!(?config, "generating random tree");
    let values = shuffled_values(config, rng);
    if config.is_perfect {
        return complete_tree(values);
    }
    grow(config, values, rng, |rng, _, _| {
        if rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    })
}

/// Random binary search tree of the configured height
pub fn random_bst(config: &GeneratorConfig, rng: &mut impl Rng) -> Node<i64> {
    debug!(?config, "generating random bst");
    if config.is_perfect {
        let sorted: Vec<i64> = (0..config.max_node_count() as i64).collect();
        return match perfect_bst(&sorted) {
            Some(root) => root,
            None => unreachable!("a perfect tree has at least one node"),
        };
    }
    let values = shuffled_values(config, rng);
    grow(config, values, rng, |_, current, value| {
        if current > value {
            Side::Left
        } else {
            Side::Right
        }
    })
}

/// Random heap of the configured height
///
/// Non-perfect heaps keep a random prefix of at least `2^height` values, the
/// smallest count that still reaches the full height.
pub fn random_heap(config: &GeneratorConfig, rng: &mut impl Rng) -> Node<i64> {
    debug!(?config, "generating random heap");
    let mut values = shuffled_values(config, rng);
    if !config.is_perfect {
        let cut = rng.gen_range(1 << config.height..=values.len());
        values.truncate(cut);
    }
    if config.is_max {
        heapify(&mut values, |parent, child| parent >= child);
    } else {
        heapify(&mut values, |parent, child| parent <= child);
    }
    complete_tree(values)
}

/// Random tree on the thread-local RNG
pub fn tree(height: usize, is_perfect: bool) -> Result<Node<i64>, TreeError> {
    let config = GeneratorConfig::new(height)?.with_perfect(is_perfect);
    Ok(random_tree(&config, &mut rand::thread_rng()))
}

/// Random BST on the thread-local RNG
pub fn bst(height: usize, is_perfect: bool) -> Result<Node<i64>, TreeError> {
    let config = GeneratorConfig::new(height)?.with_perfect(is_perfect);
    Ok(random_bst(&config, &mut rand::thread_rng()))
}

/// Random heap on the thread-local RNG
pub fn heap(height: usize, is_max: bool, is_perfect: bool) -> Result<Node<i64>, TreeError> {
    let config = GeneratorConfig::new(height)?
        .with_perfect(is_perfect)
        .with_max(is_max);
    Ok(random_heap(&config, &mut rand::thread_rng()))
}

fn shuffled_values(config: &GeneratorConfig, rng: &mut impl Rng) -> Vec<i64> {
    let mut values: Vec<i64> = (0..config.max_node_count() as i64).collect();
    values.shuffle(rng);
    values
}

/// Leaf target for non-perfect shapes, never zero above height 0
fn random_leaf_count(height: usize, rng: &mut impl Rng) -> usize {
    let max_leaf_count = 1 << height;
    let half_leaf_count = max_leaf_count / 2;
    let roll_1 = rng.gen_range(0..=half_leaf_count);
    let roll_2 = rng.gen_range(0..=max_leaf_count - half_leaf_count);
    match roll_1 + roll_2 {
        0 => half_leaf_count,
        count => count,
    }
}

/// Insert values one by one, walking down from the root until `choose`
/// leads to a free slot within the height limit
fn grow<R, F>(config: &GeneratorConfig, values: Vec<i64>, rng: &mut R, mut choose: F) -> Node<i64>
where
    R: Rng,
    F: FnMut(&mut R, i64, i64) -> Side,
{
    let height = config.height;
    let leaf_target = random_leaf_count(height, rng);
    let mut values = values.into_iter();
    let mut root = Node::leaf(values.next().unwrap_or_default());
    let mut full_depth_leaves = 0;

    for value in values {
        let mut node = &mut root;
        let mut depth = 0;
        let mut inserted = false;

        while depth < height && !inserted {
            let side = choose(rng, *node.value(), value);
            let slot = node.slot_mut(side);
            inserted = slot.is_none();
            node = &mut **slot.get_or_insert_with(|| Box::new(Node::leaf(value)));
            depth += 1;
        }

        if inserted && depth == height {
            full_depth_leaves += 1;
        }
        if full_depth_leaves == leaf_target {
            break;
        }
    }

    debug!(size = root.size(), leaves = full_depth_leaves, "grew random tree");
    root
}

/// Perfect BST from an odd number of sorted values (middle value at the root)
fn perfect_bst(sorted: &[i64]) -> Option<Node<i64>> {
    let mid = sorted.len() / 2;
    let value = *sorted.get(mid)?;
    let mut root = Node::leaf(value);
    root.set_left(perfect_bst(&sorted[..mid]));
    root.set_right(perfect_bst(&sorted[mid + 1..]));
    Some(root)
}

/// Sift-down heapify; `in_order(parent, child)` holds for every edge afterwards
fn heapify(values: &mut [i64], in_order: impl Fn(i64, i64) -> bool) {
    let len = values.len();
    for start in (0..len / 2).rev() {
        let mut parent = start;
        loop {
            let mut top = parent;
            for child in [2 * parent + 1, 2 * parent + 2] {
                if child < len && !in_order(values[top], values[child]) {
                    top = child;
                }
            }
            if top == parent {
                break;
            }
            values.swap(parent, top);
            parent = top;
        }
    }
}

/// Complete tree holding `values` in level-order
fn complete_tree(values: Vec<i64>) -> Node<i64> {
    let len = values.len();
    let parts = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| NodeParts {
            value,
            left: Some(2 * index + 1).filter(|&i| i < len),
            right: Some(2 * index + 2).filter(|&i| i < len),
        })
        .collect();

    match Node::assemble(parts) {
        Some(root) => root,
        None => unreachable!("generators always produce at least one value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_height_bounds() {
        assert!(GeneratorConfig::new(MAX_HEIGHT).is_ok());
        assert_eq!(
            GeneratorConfig::new(10).unwrap_err(),
            TreeError::InvalidHeight { height: 10, max: 9 }
        );
        assert!(tree(12, false).is_err());
        assert!(bst(10, true).is_err());
        assert!(heap(11, true, false).is_err());
    }

    #[test]
    fn test_height_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GeneratorConfig::new(0).unwrap();
        for root in [
            random_tree(&config, &mut rng),
            random_bst(&config, &mut rng),
            random_heap(&config, &mut rng),
        ] {
            assert_eq!(root.size(), 1);
            assert_eq!(*root.value(), 0);
        }
    }

    #[test]
    fn test_perfect_shapes() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::new(4).unwrap().with_perfect(true);

        let root = random_tree(&config, &mut rng);
        assert!(root.is_perfect());
        assert_eq!(root.size(), 31);

        let root = random_bst(&config, &mut rng);
        assert!(root.is_perfect() && root.is_bst());
        assert_eq!(*root.value(), 15);

        let root = random_heap(&config.with_max(false), &mut rng);
        assert!(root.is_perfect() && root.is_min_heap());
        assert_eq!(*root.value(), 0);
    }

    #[test]
    fn test_heapify_orders_every_edge() {
        let mut values = vec![3, 9, 1, 7, 5, 8, 2, 6, 4, 0];
        heapify(&mut values, |parent, child| parent >= child);
        for child in 1..values.len() {
            assert!(values[(child - 1) / 2] >= values[child]);
        }
        assert_eq!(values[0], 9);
    }

    #[test]
    fn test_leaf_count_is_never_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for height in 1..=MAX_HEIGHT {
            for _ in 0..50 {
                let count = random_leaf_count(height, &mut rng);
                assert!(count >= 1 && count <= 1 << height);
            }
        }
    }
}
