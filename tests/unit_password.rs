use jwtgate_core::{BcryptHasher, PasswordHasher};

fn hasher() -> BcryptHasher {
    BcryptHasher::new(4)
}

#[test]
fn test_hash_password_success() {
    let result = hasher().hash("testpassword123");
    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, "testpassword123");
}

#[test]
fn test_hash_password_different_hashes() {
    let h = hasher();
    let hash1 = h.hash("samepassword").unwrap();
    let hash2 = h.hash("samepassword").unwrap();

    // Salted, so the digests differ even for equal input
    assert_ne!(hash1, hash2);
    assert!(h.verify(&hash1, "samepassword").unwrap());
    assert!(h.verify(&hash2, "samepassword").unwrap());
}

#[test]
fn test_verify_password_wrong() {
    let h = hasher();
    let hash = h.hash("correctpassword").unwrap();
    assert!(!h.verify(&hash, "wrongpassword").unwrap());
}

#[test]
fn test_verify_password_is_case_sensitive() {
    let h = hasher();
    let hash = h.hash("Password").unwrap();
    assert!(!h.verify(&hash, "password").unwrap());
}

#[test]
fn test_hash_password_unicode() {
    let h = hasher();
    let hash = h.hash("пароль密码🔒").unwrap();
    assert!(h.verify(&hash, "пароль密码🔒").unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    assert!(hasher().verify("invalid_hash_format", "password").is_err());
}

#[test]
fn test_hash_uses_configured_cost() {
    let hash = hasher().hash("p").unwrap();
    assert!(hash.starts_with("$2b$04$"));
}
