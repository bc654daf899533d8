use policy_audit::domain::Embedding;

#[test]
fn given_embedding_when_checking_dimensions_then_returns_correct_size() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3]);
    assert_eq!(embedding.dimensions(), 3);
}

#[test]
fn given_identical_vectors_when_computing_distance_then_returns_zero() {
    let a = Embedding::new(vec![0.6, 0.8, 0.0]);
    let b = Embedding::new(vec![0.6, 0.8, 0.0]);

    let distance = a.cosine_distance(&b).unwrap();
    assert!(distance.abs() < 1e-6);
}

#[test]
fn given_orthogonal_vectors_when_computing_distance_then_returns_one() {
    let a = Embedding::new(vec![1.0, 0.0, 0.0]);
    let b = Embedding::new(vec![0.0, 1.0, 0.0]);

    let distance = a.cosine_distance(&b).unwrap();
    assert!((distance - 1.0).abs() < 1e-6);
}

#[test]
fn given_zero_vector_when_computing_distance_then_returns_none() {
    let a = Embedding::zeros(3);
    let b = Embedding::new(vec![1.0, 0.0, 0.0]);

    assert!(a.cosine_distance(&b).is_none());
    assert!(b.cosine_distance(&a).is_none());
}

#[test]
fn given_mismatched_dimensions_when_computing_distance_then_returns_none() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![1.0, 0.0, 0.0]);

    assert!(a.cosine_distance(&b).is_none());
}

#[test]
fn given_vector_when_normalizing_then_norm_is_one() {
    let embedding = Embedding::new(vec![3.0, 4.0]).l2_normalized();

    assert!((embedding.norm() - 1.0).abs() < 1e-6);
    assert!((embedding.values[0] - 0.6).abs() < 1e-6);
}

#[test]
fn given_zero_vector_when_normalizing_then_stays_zero() {
    let embedding = Embedding::zeros(4).l2_normalized();

    assert!(embedding.is_zero());
    assert!(embedding.values.iter().all(|v| !v.is_nan()));
}
