//! Top-level state: narrative, active scene and tool panel.

use crate::camera::RayCaster;
use crate::draw::DrawList;
use crate::drag::PointerInput;
use crate::narrative::NarrativeState;
use crate::scene::{Scene, SceneEvent};
use crate::tools::{ToolEvent, ToolPanel};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppEvent {
    /// The narrative "Continue" / "Start Exploring" button.
    Continue,
    Pointer(PointerInput),
    Tick,
    Tool(ToolEvent),
}

/// What the DOM overlay should currently show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    pub prompt: &'static str,
    pub button_label: &'static str,
    pub narrative_visible: bool,
    pub tools_visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explorer {
    pub narrative: NarrativeState,
    pub scene: Scene,
    pub tools: ToolPanel,
}

impl Default for Explorer {
    fn default() -> Self {
        let narrative = NarrativeState::default();
        Self {
            narrative,
            scene: Scene::initial(narrative.scene_kind()),
            tools: ToolPanel::default(),
        }
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: &AppEvent, caster: &impl RayCaster) -> Self {
        match event {
            AppEvent::Continue => {
                let narrative = self.narrative.advance();
                let scene = if narrative.scene_kind() != self.scene.kind() {
                    Scene::initial(narrative.scene_kind())
                } else {
                    self.scene
                };
                Self {
                    narrative,
                    scene: scene.with_selection(self.tools.selected),
                    ..self
                }
            }
            AppEvent::Pointer(p) => Self {
                scene: self.scene.apply(&SceneEvent::Pointer(*p), caster),
                ..self
            },
            AppEvent::Tick => Self {
                scene: self.scene.apply(&SceneEvent::Tick, caster),
                ..self
            },
            AppEvent::Tool(t) => {
                if !self.narrative.exploration_active {
                    log::debug!("[tools] ignoring {:?} outside exploration mode", t);
                    return self;
                }
                let tools = self.tools.apply(*t);
                Self {
                    scene: self.scene.with_selection(tools.selected),
                    tools,
                    ..self
                }
            }
        }
    }

    pub fn draw_list(&self) -> DrawList {
        self.scene.draw_list()
    }

    pub fn overlay(&self) -> OverlayView {
        OverlayView {
            prompt: self.narrative.prompt(),
            button_label: self.narrative.button_label(),
            narrative_visible: !self.narrative.exploration_active,
            tools_visible: self.narrative.exploration_active,
        }
    }
}
