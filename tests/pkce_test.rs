use dancify::error::ApiError;
use dancify::pkce::{VERIFIER_LENGTH, generate_code_challenge, generate_code_verifier};

#[test]
fn test_generate_code_verifier_length_and_alphabet() {
    for length in [43, 64, 100, 128] {
        let verifier = generate_code_verifier(length).unwrap();

        // Should be exactly the requested length
        assert_eq!(verifier.len(), length);

        // Should contain only alphanumeric characters
        assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_generate_code_verifier_default_length() {
    let verifier = generate_code_verifier(VERIFIER_LENGTH).unwrap();
    assert_eq!(verifier.len(), 128);
}

#[test]
fn test_generate_code_verifier_randomness() {
    // Two generated verifiers should be different
    let first = generate_code_verifier(VERIFIER_LENGTH).unwrap();
    let second = generate_code_verifier(VERIFIER_LENGTH).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_generate_code_verifier_rejects_invalid_lengths() {
    for length in [0, 1, 42, 129, 4096] {
        let result = generate_code_verifier(length);
        assert!(matches!(
            result,
            Err(ApiError::InvalidVerifierLength(l)) if l == length
        ));
    }
}

#[test]
fn test_generate_code_challenge_deterministic() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);
}

#[test]
fn test_generate_code_challenge_is_unpadded_base64url() {
    let verifier = generate_code_verifier(VERIFIER_LENGTH).unwrap();
    let challenge = generate_code_challenge(&verifier);

    // URL-safe alphabet only, no '+' or '/' and no '=' padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );

    // A SHA-256 digest encodes to exactly 43 base64 characters unpadded
    assert_eq!(challenge.len(), 43);
}

#[test]
fn test_generate_code_challenge_rfc7636_vector() {
    // Appendix B of RFC 7636
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    let challenge = generate_code_challenge(verifier);
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}
