use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use super::enumeration::Enum;
use crate::member::EnumMember;

impl<M: EnumMember> Enum<M> {
    /// Pick a member using `seed` as the only source of randomness.
    ///
    /// The generator is ChaCha8 seeded with `ChaCha8Rng::seed_from_u64(seed)`
    /// and the index is one `random_range(0..len)` draw. The same seed on an
    /// enum with the same members always yields the same member, on every
    /// platform. Changing the generator or the draw is a breaking change.
    ///
    /// Returns `None` for an empty enum.
    pub fn choice(&self, seed: u64) -> Option<&M> {
        if self.is_empty() {
            return None;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let index = rng.random_range(0..self.len());
        trace!(seed, len = self.len(), index, "picked enum member");

        self.get(index)
    }
}
