/// One week of the study plan before it is pinned to calendar dates.
#[derive(Debug, Clone, Copy)]
pub struct PlanEntry {
    pub subject: &'static str,
    pub topics: &'static [&'static str],
}

const fn week(subject: &'static str, topics: &'static [&'static str]) -> PlanEntry {
    PlanEntry { subject, topics }
}

/// Ordered weekly bundles, one per schedule week.
pub static PLAN_TEMPLATE: &[PlanEntry] = &[
    // Linear Algebra
    week("Linear Algebra", &["Basics of Matrices & Determinants", "Rank, Inverse & System of Equations"]),
    week("Linear Algebra", &["Vector Spaces & Subspaces", "Basis, Dimension & Linear Independence"]),
    week("Linear Algebra", &["Eigenvalues & Eigenvectors", "Diagonalization & Cayley-Hamilton Theorem"]),
    week("Linear Algebra", &["Singular Value Decomposition (SVD)", "LU Decomposition & Review"]),
    // Calculus
    week("Calculus", &["Limits, Continuity & Differentiability", "Mean Value Theorems"]),
    week("Calculus", &["Definite & Indefinite Integrals", "Applications of Integration"]),
    week("Calculus", &["Maxima & Minima (Single & Multi-variable)", "Partial Derivatives"]),
    week("Calculus", &["Gradient, Divergence, Curl", "Optimization Techniques"]),
    // Probability & Stats
    week("Probability & Stats", &["Permutations & Combinations", "Probability Axioms & Bayes Theorem"]),
    week("Probability & Stats", &["Random Variables (Discrete/Continuous)", "Expectation, Variance & Moments"]),
    week("Probability & Stats", &["Discrete Distributions (Binomial, Poisson)", "Continuous Distributions (Normal, Exp)"]),
    week("Probability & Stats", &["Joint Distributions & Covariance", "Central Limit Theorem & Correlation"]),
    week("Probability & Stats", &["Sampling & Estimation", "Hypothesis Testing & Regression"]),
    // Python & DSA
    week("Python & DSA", &["Python Basics: Variables, Loops, Functions", "List Comprehensions & Maps"]),
    week("Python & DSA", &["Recursion & Backtracking", "Sorting & Searching Algorithms"]),
    week("Python & DSA", &["Arrays, Linked Lists, Stacks & Queues", "Time & Space Complexity"]),
    week("Python & DSA", &["Trees (Binary, BST, AVL)", "Tree Traversals"]),
    week("Python & DSA", &["Graphs (BFS, DFS)", "Shortest Path Algorithms (Dijkstra, Bellman-Ford)"]),
    week("Python & DSA", &["Advanced Graphs: MST (Prim/Kruskal), Topological Sort, Network Flow"]),
    week("Python & DSA", &["Dynamic Programming (Basic)", "Greedy Algorithms"]),
    week("Python & DSA", &["Hashing & Sets", "Heaps & Priority Queues"]),
    week("Python & DSA", &["Advanced Python Libraries (NumPy, Pandas)", "DSA Revision"]),
    // DBMS
    week("DBMS", &["ER Model & Relational Model", "Keys & Constraints"]),
    week("DBMS", &["SQL Basics (DDL, DML, DQL)", "Joins & Subqueries"]),
    week("DBMS", &["Normalization (1NF, 2NF, 3NF, BCNF)", "Functional Dependencies"]),
    week("DBMS", &["Transactions & Concurrency Control", "Indexing (B-Trees, B+ Trees)"]),
    // Machine Learning
    week("Machine Learning", &["Supervised Learning Basics", "Linear & Logistic Regression"]),
    week("Machine Learning", &["Decision Trees & Random Forests", "Ensemble Methods (Bagging, Boosting)"]),
    week("Machine Learning", &["Support Vector Machines (SVM)", "k-Nearest Neighbors (k-NN)"]),
    week("Machine Learning", &["Unsupervised Learning: k-Means Clustering", "Hierarchical Clustering & PCA"]),
    week("Machine Learning", &["Dimensionality Reduction (LDA, t-SNE) & Recommender Systems"]),
    week("Machine Learning", &["Neural Networks Basics: Perceptron", "Backpropagation & Activation Functions"]),
    week("Machine Learning", &["Deep Learning: CNN Basics", "Regularization & Optimization"]),
    week("Machine Learning", &["Model Evaluation Metrics (Precision, Recall, F1)", "Bias-Variance Tradeoff"]),
    week("Machine Learning", &["Practical ML Pipeline", "Case Studies & Revision"]),
    // AI
    week("AI", &["AI Introduction & Agents", "Uninformed Search (BFS, DFS)"]),
    week("AI", &["Informed Search (A*, Heuristics)", "Adversarial Search (Minimax, Alpha-Beta)"]),
    week("AI", &["Logic & Knowledge Representation", "Propositional & First-Order Logic"]),
    week("AI", &["Planning & Reasoning", "AI Ethics & Future"]),
    // Final Revision, the last two months
    week("Final Revision", &["Math Revision: Linear Algebra, Calculus, Prob & Stats"]),
    week("Final Revision", &["Core CS Revision: DSA, Python, DBMS"]),
    week("Final Revision", &["AI/ML Revision: Algorithms & Models"]),
    week("Final Revision", &["Full Mock Test 1 (Standard Pattern) & Analysis"]),
    week("Final Revision", &["Full Mock Test 2 (Difficult Pattern) & Analysis"]),
    week("Final Revision", &["Full Mock Test 3 (Time Pressure) & Analysis"]),
    week("Final Revision", &["Full Mock Test 4 (Predicted Questions) & Analysis"]),
    week("Final Revision", &["Previous Year Papers Marathon (Last 5 Years)"]),
    week("Final Revision", &["Final Logic Revision, Formula Sheets & Exam Strategy"]),
];
