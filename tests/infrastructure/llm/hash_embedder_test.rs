use policy_audit::application::ports::Embedder;
use policy_audit::infrastructure::llm::{HASH_MODEL, HASH_PROVIDER, HashEmbedder, embed_text};

const DIMENSION: usize = 1536;

#[tokio::test]
async fn given_text_when_embedding_then_vector_has_unit_norm() {
    let embedder = HashEmbedder::new(DIMENSION);

    let embedding = embedder
        .embed_one("Incident response plan includes breach notification timelines.")
        .await
        .unwrap();

    assert_eq!(embedding.dimensions(), DIMENSION);
    assert!((embedding.norm() - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn given_text_without_ascii_tokens_when_embedding_then_returns_zero_vector() {
    let embedder = HashEmbedder::new(DIMENSION);

    for text in ["", "   \n\t", "données über 日本語"] {
        let embedding = embedder.embed_one(text).await.unwrap();
        assert_eq!(embedding.dimensions(), DIMENSION);
        assert!(embedding.is_zero(), "expected zero vector for {text:?}");
    }
}

#[test]
fn given_same_text_twice_when_embedding_then_vectors_are_bit_identical() {
    let text = "Privacy notice discloses data sharing with third parties.";

    let first = embed_text(text, DIMENSION);
    let second = embed_text(text, DIMENSION);

    let first_bits: Vec<u32> = first.values.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u32> = second.values.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn given_different_case_when_embedding_then_vectors_match() {
    assert_eq!(
        embed_text("Access Controls", DIMENSION),
        embed_text("access controls", DIMENSION)
    );
}

#[test]
fn given_single_token_when_embedding_then_one_slot_holds_full_weight() {
    let embedding = embed_text("formulary", 8);

    let non_zero: Vec<f32> = embedding.values.iter().copied().filter(|v| *v != 0.0).collect();
    assert_eq!(non_zero, vec![1.0]);
}

#[test]
fn given_known_tokens_when_embedding_then_land_in_fixed_slots() {
    let policy = embed_text("policy", DIMENSION);
    assert_eq!(policy.values[721], 1.0);
    assert_eq!(policy.values.iter().filter(|v| **v != 0.0).count(), 1);

    let pair = embed_text("Retention policy", DIMENSION);
    let half = 1.0 / 2.0f32.sqrt();
    assert!((pair.values[721] - half).abs() < 1e-6);
    assert!((pair.values[804] - half).abs() < 1e-6);

    assert_eq!(embed_text("gdpr", 64).values[62], 1.0);
}

#[test]
fn given_mixed_tokens_when_embedding_then_non_ascii_tokens_are_ignored() {
    assert_eq!(
        embed_text("retention café policy", DIMENSION),
        embed_text("retention policy", DIMENSION)
    );
}

#[tokio::test]
async fn given_large_batch_when_embedding_many_then_matches_single_embeddings_in_order() {
    let embedder = HashEmbedder::new(64);
    let owned: Vec<String> = (0..150).map(|i| format!("paragraph number {i}")).collect();
    let texts: Vec<&str> = owned.iter().map(String::as_str).collect();

    let batch = embedder.embed_many(&texts).await.unwrap();

    assert_eq!(batch.len(), texts.len());
    for (text, embedding) in texts.iter().zip(&batch) {
        assert_eq!(embedding, &embed_text(text, 64));
    }
}

#[test]
fn given_hash_embedder_when_reading_info_then_reports_hash_backend() {
    let info = HashEmbedder::default().info();

    assert_eq!(info.provider, HASH_PROVIDER);
    assert_eq!(info.model, HASH_MODEL);
    assert_eq!(HashEmbedder::default().dimension(), DIMENSION);
}
