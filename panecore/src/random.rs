//! Random string generation
//!
//! Short identifiers for window titles, temp files and dialog handshakes.
//! Not for security tokens: the source is the thread-local generator with
//! no seeding control and no reproducibility guarantee.

use rand::Rng;

/// Characters a generated string draws from. Visually ambiguous letters
/// and the digits 0, 1 and 9 are excluded so strings survive being read
/// aloud or retyped.
pub const TOKEN_ALPHABET: &str = "ABCDEFGHJKMNPQRSTWXYZabcdefhijkmnprstwxyz2345678";

/// Length substituted when the caller passes 0.
pub const DEFAULT_TOKEN_LEN: i32 = 32;

/// Generate a random string of `len` characters from [`TOKEN_ALPHABET`].
///
/// A `len` of 0 means "use the default" ([`DEFAULT_TOKEN_LEN`]) — there is
/// no way to request an empty string through this interface. Negative
/// lengths iterate zero times and yield `""`. Each position is drawn
/// independently and uniformly; nothing guards against collisions.
pub fn random_string(len: i32) -> String {
    let len = if len == 0 { DEFAULT_TOKEN_LEN } else { len };
    let chars = TOKEN_ALPHABET.as_bytes();
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(len.max(0) as usize);
    for _ in 0..len {
        out.push(chars[rng.gen_range(0..chars.len())] as char);
    }
    out
}
