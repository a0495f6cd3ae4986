use crate::core::instances::{FeatureValue, Label};

/// A decision tree node. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        label: Label,
    },
    Decision {
        feature_index: usize,
        /// Taken when the feature value is 0.
        left: Box<Node>,
        /// Taken for any other value.
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(label: Label) -> Self {
        Node::Leaf { label }
    }

    pub fn decision(feature_index: usize, left: Node, right: Node) -> Self {
        Node::Decision {
            feature_index,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Follows the branches selected by `features` down to a leaf. A missing
    /// feature value is read as 0.
    pub fn classify(&self, features: &[FeatureValue]) -> Label {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Decision {
                    feature_index,
                    left,
                    right,
                } => {
                    let value = features.get(*feature_index).copied().unwrap_or(0);
                    node = if value == 0 { left.as_ref() } else { right.as_ref() };
                }
            }
        }
    }

    pub fn count_decision_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Decision { left, right, .. } => {
                1 + left.count_decision_nodes() + right.count_decision_nodes()
            }
        }
    }

    pub fn count_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Decision { left, right, .. } => left.count_leaves() + right.count_leaves(),
        }
    }

    /// Number of decision nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Decision { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Feature indices tested along each root-to-leaf path.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        match self {
            Node::Leaf { .. } => vec![Vec::new()],
            Node::Decision {
                feature_index,
                left,
                right,
            } => left
                .paths()
                .into_iter()
                .chain(right.paths())
                .map(|mut path| {
                    path.insert(0, *feature_index);
                    path
                })
                .collect(),
        }
    }
}
