//! Helicone webhook signature verification.
//!
//! Helicone signs the raw webhook body with HMAC-SHA256 and sends the
//! hex digest in the `helicone-signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify a Helicone webhook signature.
///
/// Computes HMAC-SHA256 over the raw request body using the shared
/// secret, hex-encodes the digest, and compares it to the supplied
/// signature in constant time. Fails closed: a missing signature or a
/// key setup failure returns `false`, never an error.
pub fn verify_signature(secret: &str, raw_body: &[u8], signature: Option<&str>) -> bool {
    let signature = match signature {
        Some(s) => s,
        None => {
            warn!("webhook_signature_missing");
            return false;
        }
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_signature_invalid_key");
            return false;
        }
    };

    mac.update(raw_body);

    let expected_signature = hex::encode(mac.finalize().into_bytes());

    let valid = constant_time_compare(&expected_signature, signature);

    if !valid {
        warn!(
            expected_length = expected_signature.len(),
            actual_length = signature.len(),
            "webhook_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
///
/// Unequal lengths return false immediately; equal lengths are always
/// compared in full with no short circuit.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_verify_signature_roundtrip() {
        let secret = "webhook-secret";
        let body = br#"{"request_id":"req-1"}"#;
        let signature = sign(secret, body);

        assert!(verify_signature(secret, body, Some(&signature)));
    }

    #[test]
    fn test_verify_signature_missing() {
        assert!(!verify_signature("secret", b"body", None));
    }

    #[test]
    fn test_verify_signature_wrong_length() {
        let secret = "webhook-secret";
        let body = b"payload";
        let mut truncated = sign(secret, body);
        truncated.pop();

        assert!(!verify_signature(secret, body, Some(&truncated)));
        assert!(!verify_signature(secret, body, Some("")));
    }

    #[test]
    fn test_verify_signature_single_bit_flip() {
        let secret = "webhook-secret";
        let body = b"payload";
        let signature = sign(secret, body);

        // Flip one bit in every hex digit position in turn.
        for i in 0..signature.len() {
            let mut bytes = signature.clone().into_bytes();
            bytes[i] ^= 0x01;
            let tampered = String::from_utf8(bytes).unwrap();
            if tampered == signature {
                continue;
            }
            assert!(
                !verify_signature(secret, body, Some(&tampered)),
                "flipped digit {} accepted",
                i
            );
        }
    }

    #[test]
    fn test_verify_signature_different_body() {
        let secret = "webhook-secret";
        let signature = sign(secret, b"original");

        assert!(!verify_signature(secret, b"tampered", Some(&signature)));
    }

    #[test]
    fn test_verify_signature_wrong_secret() {
        let body = b"payload";
        let signature = sign("secret-a", body);

        assert!(!verify_signature("secret-b", body, Some(&signature)));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
