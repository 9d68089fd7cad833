//! Backslash escapes allowed in feature titles and descriptions.

/// Stands in for an escaped backslash while the other escapes are decoded,
/// so `\\n` stays a backslash followed by `n`.
const BACKSLASH_PLACEHOLDER: &str = "\u{FFFE}";

/// Decode `\n`, `\r`, `\t`, `\'`, `\"` and `\\` written literally in a line.
///
/// Unknown escapes such as `\q` are left untouched.
pub fn decode(input: &str) -> String {
    input
        .replace(r"\\", BACKSLASH_PLACEHOLDER)
        .replace(r"\n", "\n")
        .replace(r"\r", "\r")
        .replace(r"\t", "\t")
        .replace(r"\'", "'")
        .replace(r#"\""#, "\"")
        .replace(BACKSLASH_PLACEHOLDER, r"\")
}
