use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;

#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq.powf(2.0);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    /// Size-weighted Gini impurity of the branches.
    fn impurity_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64 {
        let mut total_weight = 0.0;
        let mut dist_weights = Vec::with_capacity(post_split_dists.len());

        for dist in post_split_dists.iter() {
            let w: f64 = dist.iter().sum();
            dist_weights.push(w);
            total_weight += w;
        }

        let mut gini = 0.0;
        for (i, dist) in post_split_dists.iter().enumerate() {
            if total_weight > 0.0 && dist_weights[i] > 0.0 {
                gini += (dist_weights[i] / total_weight) * self.compute_gini(dist, dist_weights[i]);
            }
        }

        gini
    }
}
