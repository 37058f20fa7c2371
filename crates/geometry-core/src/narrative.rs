use crate::scene::SceneKind;

pub const NARRATIVE_STEPS: [&str; 5] = [
    "Welcome to your geometric journey. Let's start by exploring points in space.",
    "Points connect to form lines. Drag these points to see how lines change.",
    "Lines can enclose space to create shapes. Explore the triangle.",
    "Shapes can transform. Try rotating and scaling the shape.",
    "Now explore freely! Create your own geometric constructions.",
];

/// Position in the guided script.
///
/// `step_index` never decreases and stops at the last prompt; advancing past
/// it switches exploration on for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrativeState {
    pub step_index: usize,
    pub exploration_active: bool,
}

impl NarrativeState {
    pub const NUM_STEPS: usize = NARRATIVE_STEPS.len();

    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 >= Self::NUM_STEPS
    }

    pub fn advance(self) -> Self {
        if !self.is_last_step() {
            let next = Self {
                step_index: self.step_index + 1,
                ..self
            };
            log::info!("[narrative] step {} -> {}", self.step_index, next.step_index);
            next
        } else {
            if !self.exploration_active {
                log::info!("[narrative] entering exploration mode");
            }
            Self {
                exploration_active: true,
                ..self
            }
        }
    }

    pub fn prompt(&self) -> &'static str {
        NARRATIVE_STEPS[self.step_index.min(Self::NUM_STEPS - 1)]
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_last_step() {
            "Start Exploring"
        } else {
            "Continue"
        }
    }

    /// Scene shown for the current step.
    ///
    /// The closing prompt previews the exploration scene before the panel opens.
    pub fn scene_kind(&self) -> SceneKind {
        if self.exploration_active {
            return SceneKind::Exploration;
        }
        match self.step_index {
            0 => SceneKind::Points,
            1 => SceneKind::Lines,
            2 => SceneKind::Shapes,
            3 => SceneKind::Transformations,
            _ => SceneKind::Exploration,
        }
    }
}
