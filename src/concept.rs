use rand::Rng;
use rand::seq::SliceRandom;

use crate::brief::Brief;
use crate::phrases;

/// Batch size for one concept generation request.
pub const CONCEPT_BATCH: usize = 3;

/// One generated ad concept: a hook, a framing angle, a value proposition and
/// a call to action. Not persisted; regenerated per request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Concept {
    pub hook: String,
    pub angle: String,
    pub value: String,
    pub cta: String,
}

/// Generate a batch of concepts from the brief.
///
/// Hooks and angles are sampled without replacement from the phrase bank
/// (batch size `min(3, list length)`) and paired positionally; the CTA is an
/// independent uniform pick per concept. Pure function of brief + RNG: pass a
/// seeded [`rand::rngs::StdRng`] for reproducible batches.
#[tracing::instrument(skip(brief, rng))]
pub fn generate_concepts(brief: &Brief, rng: &mut impl Rng) -> Vec<Concept> {
    let hooks: Vec<&str> = phrases::HOOKS
        .choose_multiple(rng, CONCEPT_BATCH.min(phrases::HOOKS.len()))
        .copied()
        .collect();
    let angles: Vec<&str> = phrases::ANGLES
        .choose_multiple(rng, CONCEPT_BATCH.min(phrases::ANGLES.len()))
        .copied()
        .collect();

    let value = format!(
        "{} helps {} {} with {}.",
        brief.brand, brief.audience, brief.goal, brief.offer
    );

    hooks
        .iter()
        .zip(angles.iter())
        .map(|(hook, angle)| Concept {
            hook: interpolate(hook, brief),
            angle: (*angle).to_string(),
            value: value.clone(),
            cta: phrases::CTAS
                .choose(rng)
                .copied()
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

fn interpolate(template: &str, brief: &Brief) -> String {
    template
        .replace("{audience}", &brief.audience)
        .replace("{brand}", &brief.brand)
        .replace("{goal}", &brief.goal)
}
