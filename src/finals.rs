//! Stratified "finals" sets: fixed shares per subject, topped up from the
//! whole bank.

use std::collections::HashSet;

use rand::Rng;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    bank::{Pool, QuestionBank},
    models::Question,
    sampler,
};

/// Subject shares, serialized as a JSON object in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct RatioTable(pub &'static [(&'static str, f64)]);

impl Serialize for RatioTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (subject, ratio) in self.0 {
            map.serialize_entry(subject, ratio)?;
        }
        map.end()
    }
}

pub struct Finals<'a> {
    pub items: Pool<'a>,
    pub requested: usize,
}

impl Finals<'_> {
    pub fn delivered(&self) -> usize {
        self.items.len()
    }
}

/// Build a finals set of at most `count` questions.
///
/// Each subject contributes `floor(count * ratio)` shuffled questions, in
/// table order, capped so the set never exceeds `count`. Any shortfall is
/// filled from a shuffle of the whole bank, skipping questions already taken.
/// Running out of filler is not an error.
pub fn compose<'a, R: Rng + ?Sized>(
    bank: &'a QuestionBank,
    ratios: RatioTable,
    count: usize,
    rng: &mut R,
) -> Finals<'a> {
    let mut items: Pool<'a> = Vec::new();

    for &(subject, ratio) in ratios.0 {
        let share = (count as f64 * ratio).floor() as usize;
        let share = share.min(count - items.len());
        let pool = bank.collect_subject(subject);
        let picked = sampler::take_random(&pool, share, rng);
        tracing::debug!(
            "finals: {subject} contributes {} of {share} from {} questions",
            picked.len(),
            pool.len()
        );
        items.extend(picked);
    }

    if items.len() < count {
        let needed = count - items.len();
        let taken: HashSet<*const Question> =
            items.iter().map(|&q| std::ptr::from_ref(q)).collect();
        let filler: Pool<'a> = sampler::shuffle(&bank.all_questions(), rng)
            .into_iter()
            .filter(|&q| !taken.contains(&std::ptr::from_ref(q)))
            .take(needed)
            .collect();
        tracing::debug!("finals: filled {} of {needed} missing questions", filler.len());
        items.extend(filler);
    }

    Finals {
        items,
        requested: count,
    }
}
