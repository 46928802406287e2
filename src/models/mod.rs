pub mod knn;

pub use knn::KnnClassifier;
