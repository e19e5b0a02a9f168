use super::*;

#[tokio::test]
async fn test_mock_preset_vector() {
    let embedder = MockEmbedder::new();
    embedder.insert("hello", vec![1.0, 0.0]);

    let v = embedder.embed("hello").await.unwrap();
    assert_eq!(v, vec![1.0, 0.0]);
}

#[tokio::test]
async fn test_mock_derived_vector_is_deterministic() {
    let embedder = MockEmbedder::new();

    let a = embedder.embed("unseen text").await.unwrap();
    let b = embedder.embed("unseen text").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), mock::MOCK_EMBEDDING_DIM);

    let c = embedder.embed("different text").await.unwrap();
    assert_ne!(a, c);
}

#[tokio::test]
async fn test_mock_failure_switch() {
    let embedder = MockEmbedder::new();
    embedder.set_fail(true);

    let err = embedder.embed("anything").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Unreachable { .. }));

    embedder.set_fail(false);
    assert!(embedder.embed("anything").await.is_ok());
}

#[test]
fn test_openai_config_builder() {
    let config = OpenAiConfig::new("https://example.com/")
        .api_key("sk-test")
        .model("text-embedding-3-large");

    assert_eq!(config.base_url, "https://example.com/");
    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.model, "text-embedding-3-large");
}

#[test]
fn test_openai_embedder_rejects_empty_model() {
    let config = OpenAiConfig {
        model: String::new(),
        ..Default::default()
    };
    assert!(matches!(
        OpenAiEmbedder::new(config),
        Err(EmbeddingError::InvalidConfig { .. })
    ));
}

#[test]
fn test_openai_embedder_url_normalization() {
    let embedder = OpenAiEmbedder::new(OpenAiConfig::new("https://example.com/")).unwrap();
    assert_eq!(embedder.model(), openai::DEFAULT_MODEL);
}
