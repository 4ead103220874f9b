use rand::{seq::SliceRandom, Rng};

pub const DAILY_TIPS: &[&str] = &[
    "Take 5 deep breaths slowly.",
    "List 3 small things you are grateful for right now.",
    "Step outside for 2 minutes and notice 3 things.",
    "Drink a full glass of water and stretch.",
    "Send a quick message to a friend or family member.",
];

pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DAILY_TIPS.choose(rng).copied().unwrap_or(DAILY_TIPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_tip_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(DAILY_TIPS.contains(&random_tip(&mut rng)));
        }
    }
}
