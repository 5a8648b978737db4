use crate::brief::Brief;

/// Number of scenes in every generated script.
pub const SCENE_COUNT: usize = 6;

/// One narrative beat of the script, rendered as one slide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub title: String,
    pub subtitle: String,
    /// Offset of this scene on the final timeline. Derived from the script
    /// duration; `None` is never produced by [`Script::from_brief`] but stays
    /// optional for scripts deserialized from external sources.
    pub start_offset_seconds: Option<u32>,
}

/// A fixed six-scene script plus its overall target duration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub duration_seconds: u32,
    pub scenes: Vec<Scene>,
}

impl Script {
    /// Derive the six-scene script from a brief.
    ///
    /// Scene content is fixed by template and fully deterministic; the
    /// duration is stored as given (range checking is the submitting form's
    /// job, via [`Brief::validate`]).
    pub fn from_brief(brief: &Brief) -> Self {
        let per_scene = per_scene_secs(brief.duration_seconds);
        let beats: [(String, String); SCENE_COUNT] = [
            (brief.brand.clone(), brief.offer.clone()),
            (brief.audience.clone(), "This is for you.".to_string()),
            (
                "The Problem".to_string(),
                format!("Doing {} is messy & slow.", brief.goal),
            ),
            (
                "The Fix".to_string(),
                format!("{} → {}", brief.brand, brief.offer),
            ),
            (
                "How it Feels".to_string(),
                "Fast. Simple. Predictable.".to_string(),
            ),
            ("Call to Action".to_string(), "Tap to try now →".to_string()),
        ];

        let scenes = beats
            .into_iter()
            .enumerate()
            .map(|(i, (title, subtitle))| Scene {
                title,
                subtitle,
                start_offset_seconds: Some(i as u32 * per_scene),
            })
            .collect();

        Self {
            duration_seconds: brief.duration_seconds,
            scenes,
        }
    }

    /// Display duration of each scene on the video timeline, in seconds.
    pub fn per_scene_secs(&self) -> u32 {
        per_scene_secs(self.duration_seconds)
    }
}

/// Equal split of the total duration across the six scenes, never below one
/// second per scene.
pub fn per_scene_secs(duration_seconds: u32) -> u32 {
    (duration_seconds / SCENE_COUNT as u32).max(1)
}
