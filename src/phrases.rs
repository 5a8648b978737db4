//! Static phrase bank for concept generation. Pure data, no logic.
//!
//! Hook templates may reference `{audience}`, `{brand}` and `{goal}`; the
//! concept generator substitutes brief fields for those placeholders.

pub const HOOKS: &[&str] = &[
    "Stop scrolling—{audience} need this.",
    "If you’re {audience}, here’s your shortcut.",
    "What if {brand} made {goal} stupid-simple?",
    "{audience}: 1 tweak to boost results—today.",
    "We tested this so you don’t have to.",
];

pub const ANGLES: &[&str] = &[
    "Pain→Relief (show problem, then solution).",
    "Before/After (contrast daily life).",
    "Myth-busting (common mistake + fix).",
    "One-feature focus (demo a single win).",
    "Social proof (mini-testimonial vibe).",
];

pub const CTAS: &[&str] = &[
    "Tap to try now.",
    "Get started—free today.",
    "Claim your spot.",
    "Join in 60 seconds.",
    "See how it works.",
];
