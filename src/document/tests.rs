use super::*;

#[test]
fn test_decode_full_document() {
    let raw = br#"{"text": "what is rust", "response": "a language", "embedding": [0.1, 0.2]}"#;
    let doc = decode(raw).unwrap();
    assert_eq!(doc.text.as_deref(), Some("what is rust"));
    assert_eq!(doc.response, "a language");
    assert_eq!(doc.embedding, vec![0.1, 0.2]);
}

#[test]
fn test_decode_text_is_optional() {
    let raw = br#"{"response": "a language", "embedding": [0.1]}"#;
    let doc = decode(raw).unwrap();
    assert!(doc.text.is_none());
}

#[test]
fn test_decode_missing_response() {
    let raw = br#"{"text": "q", "embedding": [0.1]}"#;
    let err = decode(raw).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { field: "response" }));
}

#[test]
fn test_decode_missing_embedding() {
    let raw = br#"{"text": "q", "response": "a"}"#;
    let err = decode(raw).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField { field: "embedding" }
    ));
}

#[test]
fn test_decode_not_json() {
    let err = decode(b"not json at all").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }));
}

#[test]
fn test_decode_wrong_shape() {
    let err = decode(br#"{"response": "a", "embedding": ["x", "y"]}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { .. }));
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let raw = br#"{"response": "a", "embedding": [1.0], "ttl": 300}"#;
    assert!(decode(raw).is_ok());
}
