use chrono::Utc;

/// Replay-mitigation window for webhook timestamps, in seconds.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Parsed `stripe-signature` header: one timestamp, one or more `v1`
/// signature values. Cryptographic verification of the signatures is the
/// processor SDK's business, not ours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEnvelope {
    pub timestamp: i64,
    pub signatures: Vec<String>,
}

/// Parse a `stripe-signature` header of the form
/// `t=1234567890,v1=abc,v1=def`. Unknown keys are ignored. Returns None when
/// the timestamp is missing or non-numeric, or when no `v1` entry is present.
pub fn parse_signature_header(header: &str) -> Option<SignatureEnvelope> {
    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<String> = Vec::new();

    for pair in header.split(',') {
        let (key, value) = pair.trim().split_once('=')?;
        match key {
            "t" => timestamp = Some(value.parse().ok()?),
            "v1" => signatures.push(value.to_string()),
            _ => {}
        }
    }

    let timestamp = timestamp?;
    if signatures.is_empty() {
        return None;
    }
    Some(SignatureEnvelope {
        timestamp,
        signatures,
    })
}

/// Freshness check, symmetric and inclusive: |now - timestamp| <= tolerance.
pub fn is_timestamp_valid(timestamp: i64, tolerance_secs: i64) -> bool {
    is_timestamp_valid_at(timestamp, tolerance_secs, Utc::now().timestamp())
}

pub fn is_timestamp_valid_at(timestamp: i64, tolerance_secs: i64, now: i64) -> bool {
    (now - timestamp).abs() <= tolerance_secs
}
