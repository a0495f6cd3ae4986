/// Scores a candidate split from the class distributions of its branches.
/// Lower is better.
pub trait SplitCriterion {
    fn impurity_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64;
}
