use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `order_<unix millis>_<5 base-36 chars>`. Unique in practice, not cryptographically.
    pub fn issue(now: &OffsetDateTime, rng: &mut impl Rng) -> Self {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let suffix = (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect::<String>();
        Self(format!("order_{millis}_{suffix}"))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn issued_ids_embed_timestamp_and_differ() {
        let now = datetime!(2026-03-10 12:00:00 UTC);
        let mut rng = StdRng::seed_from_u64(7);
        let first = OrderId::issue(&now, &mut rng);
        let second = OrderId::issue(&now, &mut rng);
        assert!(first.as_ref().starts_with("order_1773144000000_"));
        assert_eq!(first.as_ref().len(), "order_1773144000000_".len() + SUFFIX_LEN);
        assert_ne!(first, second);
    }
}
