//! Entrance effects for page sections, looked up by named handle.
//!
//! The view layer tags elements with a handle (`"hero"`, `"contact"`, ...)
//! and asks the registry how that handle animates in. Registration happens
//! once, from [`init`], at start-up.

use std::{collections::HashMap, sync::OnceLock};

static REGISTRY: OnceLock<MotionRegistry> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    FadeUp,
    /// Children fade up one after another, `step_ms` apart.
    Stagger { step_ms: u32 },
}

impl Entrance {
    fn class(&self) -> &'static str {
        match self {
            Entrance::Fade => "motion-fade",
            Entrance::FadeUp | Entrance::Stagger { .. } => "motion-fade-up",
        }
    }
}

#[derive(Debug)]
pub struct MotionRegistry {
    presets: HashMap<&'static str, Entrance>,
}

impl MotionRegistry {
    fn standard() -> Self {
        let mut presets = HashMap::new();
        presets.insert("navbar", Entrance::Fade);
        presets.insert("hero", Entrance::FadeUp);
        presets.insert("hero-links", Entrance::Stagger { step_ms: 120 });
        presets.insert("about", Entrance::FadeUp);
        presets.insert("about-cards", Entrance::Stagger { step_ms: 100 });
        presets.insert("skills", Entrance::FadeUp);
        presets.insert("skill-tags", Entrance::Stagger { step_ms: 40 });
        presets.insert("experience", Entrance::FadeUp);
        presets.insert("experience-roles", Entrance::Stagger { step_ms: 150 });
        presets.insert("projects", Entrance::FadeUp);
        presets.insert("project-cards", Entrance::Stagger { step_ms: 100 });
        presets.insert("contact", Entrance::FadeUp);
        presets.insert("contact-details", Entrance::Fade);
        presets.insert("contact-fields", Entrance::Stagger { step_ms: 80 });
        presets.insert("footer", Entrance::Fade);
        Self { presets }
    }

    pub fn entrance(&self, handle: &str) -> Entrance {
        self.presets.get(handle).copied().unwrap_or(Entrance::Fade)
    }

    /// Classes for an element under `handle`, before or after it is revealed.
    pub fn classes(&self, handle: &str, revealed: bool) -> String {
        let state = if revealed { "motion-in" } else { "motion-out" };
        format!("{} {state}", self.entrance(handle).class())
    }

    /// Transition delay of the `index`-th item in a staggered group.
    pub fn delay_ms(&self, handle: &str, index: usize) -> u32 {
        match self.entrance(handle) {
            Entrance::Stagger { step_ms } => step_ms.saturating_mul(index as u32),
            _ => 0,
        }
    }
}

/// Registers the standard presets. Safe to call more than once.
pub fn init() -> &'static MotionRegistry {
    REGISTRY.get_or_init(|| {
        let registry = MotionRegistry::standard();
        log::debug!("registered {} motion presets", registry.presets.len());
        registry
    })
}

pub fn registry() -> &'static MotionRegistry {
    init()
}
