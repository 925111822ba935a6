use serde::Serialize;

/// One syllabus subject and its ordered subtopics.
///
/// Subtopics are addressed by position (see [`crate::progress::SubtopicKey`]),
/// so this table is append-only: new subtopics go at the end of a list and new
/// subjects at the end of the catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subject {
    pub id: &'static str,
    /// Official syllabus heading.
    pub subject: &'static str,
    /// Short display name.
    pub name: &'static str,
    pub subtopics: &'static [&'static str],
}

impl Subject {
    pub fn subtopic(&self, index: usize) -> Option<&'static str> {
        self.subtopics.get(index).copied()
    }
}

pub static CATALOG: &[Subject] = &[
    Subject {
        id: "prob-stats",
        subject: "Probability and Statistics",
        name: "Probability & Statistics",
        subtopics: &[
            "Counting (Permutations and Combinations)",
            "Probability Axioms",
            "Sample Space, Events",
            "Independent Events",
            "Mutually Exclusive Events",
            "Marginal, Conditional and Joint Probability",
            "Bayes Theorem",
            "Conditional Expectation and Variance",
            "Mean, Median, Mode and Standard Deviation",
            "Correlation and Covariance",
            "Random Variables",
            "Discrete/Continuous Distributions",
            "Uniform, Normal, Exponential, Poisson, Binomial, Bernoulli",
            "Law of Large Numbers",
            "Central Limit Theorem",
            "Simple Linear Regression",
        ],
    },
    Subject {
        id: "linear-algebra",
        subject: "Linear Algebra",
        name: "Linear Algebra",
        subtopics: &[
            "Vector Spaces",
            "Subspaces",
            "Linear Dependence and Independence",
            "Matrices",
            "Projection Matrix",
            "Orthogonal Matrix",
            "Idempotent Matrix",
            "Partition Matrices",
            "Systems of Linear Equations",
            "Eigenvalues and Eigenvectors",
            "Singular Value Decomposition (SVD)",
        ],
    },
    Subject {
        id: "calculus",
        subject: "Calculus",
        name: "Calculus",
        subtopics: &[
            "Limits",
            "Continuity",
            "Differentiability",
            "Maxima and Minima",
            "Mean Value Theorem",
            "Integration",
        ],
    },
    Subject {
        id: "dsa",
        subject: "Programming, Data Structures and Algorithms",
        name: "Programming & DSA",
        subtopics: &[
            "Python Programming",
            "Stacks and Queues",
            "Linked Lists",
            "Trees (BST, AVL, etc.)",
            "Graphs (BFS, DFS)",
            "Hashing",
            "Sorting and Searching Algorithms",
        ],
    },
    Subject {
        id: "dbms",
        subject: "Database Management and Warehousing",
        name: "DBMS",
        subtopics: &[
            "ER-models",
            "Relational Model (Relational Algebra, Tuple Calculus)",
            "SQL Queries",
            "Integrity Constraint",
            "Normalization (1NF, 2NF, 3NF, BCNF)",
            "File Organization",
            "Indexing",
            "Data Warehousing",
        ],
    },
    Subject {
        id: "ml",
        subject: "Machine Learning",
        name: "Machine Learning",
        subtopics: &[
            "Supervised Learning (Regression, Classification)",
            "Unsupervised Learning (Clustering, PCA)",
            "Logistic Regression",
            "k-NN",
            "SVM",
            "Decision Trees",
            "Random Forest",
            "Neural Networks (MLP, Feedforward)",
            "Dimensionality Reduction",
        ],
    },
    Subject {
        id: "ai",
        subject: "Artificial Intelligence",
        name: "Artificial Intelligence",
        subtopics: &[
            "Search Strategies (BFS, DFS, A*)",
            "Logic (First-order Logic, Propositional Logic)",
            "Reasoning",
        ],
    },
];
