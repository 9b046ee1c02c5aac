//! Question identity derivation.
//!
//! A question is keyed by a 64-bit FNV-1a hash over its quiz name and
//! text. This is a deduplication key, not a security boundary.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derive the stable identity for a `(quiz_name, question_text)` pair.
///
/// Pure function of its inputs. A separator byte between the two
/// strings keeps `("ab", "c")` and `("a", "bc")` distinct.
pub fn question_id(quiz_name: &str, question_text: &str) -> String {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in quiz_name
        .bytes()
        .chain(std::iter::once(0x1f))
        .chain(question_text.bytes())
    {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("{hash:016x}")
}
