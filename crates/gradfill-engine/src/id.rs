use std::fmt;

use rand::Rng;

/// Per-instance identifier used to namespace a control's markup.
///
/// Shaped like a version-4 UUID: 36 characters, lowercase hex in
/// `8-4-4-4-12` groups, version nibble `4`, variant nibble one of `8 9 a b`.
/// Only collision avoidance between instances on one page matters; the value
/// is not a secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(String);

const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX: &[u8; 16] = b"0123456789abcdef";

impl ControlId {
    /// Length of every generated id.
    pub const LEN: usize = TEMPLATE.len();

    /// Generates an id from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates an id from `rng`. Deterministic for a seeded RNG.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let id = TEMPLATE
            .chars()
            .map(|c| match c {
                'x' => HEX[rng.gen_range(0..16)] as char,
                'y' => HEX[rng.gen_range(0..16) & 0x3 | 0x8] as char,
                other => other,
            })
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn is_hex(c: char) -> bool {
        c.is_ascii_digit() || ('a'..='f').contains(&c)
    }

    #[test]
    fn has_uuid_v4_shape() {
        let id = ControlId::generate();
        let s = id.as_str();
        assert_eq!(s.len(), 36);
        assert_eq!(ControlId::LEN, 36);

        let groups: Vec<_> = s.split('-').map(str::len).collect();
        assert_eq!(groups, [8, 4, 4, 4, 12]);
        assert!(s.chars().filter(|&c| c != '-').all(is_hex));
        assert_eq!(s.as_bytes()[14], b'4');
        assert!(matches!(s.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
    }

    #[test]
    fn variant_nibble_holds_across_many_draws() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..256 {
            let id = ControlId::generate_with(&mut rng);
            assert!(matches!(id.as_str().as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = ControlId::generate_with(&mut SmallRng::seed_from_u64(42));
        let b = ControlId::generate_with(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn independent_ids_differ() {
        assert_ne!(ControlId::generate(), ControlId::generate());
    }
}
