//! Normal ⇄ Hero view state machine.
//!
//! Each mode owns one constant table. Switching modes applies the whole table
//! in a single call, so no frame can observe Normal lighting with Hero fog.

use crate::camera::OrbitControls;
use crate::color::Rgb;
use crate::lighting::{Atmosphere, LightRig};
use crate::model::ModelHandle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Normal,
    Hero,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Normal => ViewMode::Hero,
            ViewMode::Hero => ViewMode::Normal,
        }
    }

    pub fn preset(self) -> &'static ModePreset {
        match self {
            ViewMode::Normal => &ModePreset::NORMAL,
            ViewMode::Hero => &ModePreset::HERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModePreset {
    pub background: u32,
    pub fog_density: f32,
    pub key: f32,
    pub rim: f32,
    pub ambient: f32,
    pub glow1: f32,
    pub glow2: f32,
    pub controls_enabled: bool,
}

impl ModePreset {
    pub const NORMAL: ModePreset = ModePreset {
        background: 0x0a0e1a,
        fog_density: 0.08,
        key: 1.8,
        rim: 1.2,
        ambient: 0.3,
        glow1: 2.0,
        glow2: 1.5,
        controls_enabled: true,
    };

    pub const HERO: ModePreset = ModePreset {
        background: 0x1a3050,
        fog_density: 0.03,
        key: 2.5,
        rim: 2.2,
        ambient: 0.6,
        glow1: 3.0,
        glow2: 2.5,
        controls_enabled: false,
    };
}

/// User-facing feedback lines shown in the status element / window title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Loading,
    Ready,
    HeroFromClick,
    HeroFromKey,
    NormalFromClick,
    NormalFromKey,
    HoverHint,
    HoverLeft,
    LoadFailed,
}

impl StatusMessage {
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::Loading => "Loading dragon...",
            StatusMessage::Ready => "Press 'H' for Hero View or hover/click dragon",
            StatusMessage::HeroFromClick => "🐉 Dragon Hero View - Click to exit",
            StatusMessage::HeroFromKey => "🐉 Dragon Hero View - Press 'H' to exit",
            StatusMessage::NormalFromClick => "Hover over dragon to view",
            StatusMessage::NormalFromKey => "Press 'H' for Hero View",
            StatusMessage::HoverHint => "🐉 Click dragon to enter Hero View",
            StatusMessage::HoverLeft => "Press 'H' for Hero View or hover/click dragon",
            StatusMessage::LoadFailed => "Dragon unavailable - showing placeholder",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            StatusMessage::HeroFromClick | StatusMessage::HeroFromKey => Rgb::from_hex(0x88ddff),
            StatusMessage::HoverHint => Rgb::from_hex(0x88ccff),
            StatusMessage::LoadFailed => Rgb::from_hex(0xffaa88),
            _ => Rgb::from_hex(0xffffff),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleTrigger {
    Key,
    /// `hit`: the click ray touched the model; `hovering`: the hover flag was set.
    Click { hit: bool, hovering: bool },
}

/// Decide the next mode, or `None` when the trigger is not allowed.
///
/// Keys need a fully loaded model. Clicks need some model on screen plus
/// either a ray hit or an active hover.
pub fn next_mode(current: ViewMode, trigger: ToggleTrigger, model: &ModelHandle) -> Option<ViewMode> {
    let allowed = match trigger {
        ToggleTrigger::Key => model.is_loaded(),
        ToggleTrigger::Click { hit, hovering } => !model.is_unloaded() && (hit || hovering),
    };
    allowed.then(|| current.toggled())
}

/// Status line shown after entering `mode` through `trigger`.
pub fn status_for(mode: ViewMode, trigger: ToggleTrigger) -> StatusMessage {
    match (mode, trigger) {
        (ViewMode::Hero, ToggleTrigger::Key) => StatusMessage::HeroFromKey,
        (ViewMode::Hero, ToggleTrigger::Click { .. }) => StatusMessage::HeroFromClick,
        (ViewMode::Normal, ToggleTrigger::Key) => StatusMessage::NormalFromKey,
        (ViewMode::Normal, ToggleTrigger::Click { .. }) => StatusMessage::NormalFromClick,
    }
}

/// Write every mode-owned parameter from the preset table.
pub fn apply_preset(
    mode: ViewMode,
    lights: &mut LightRig,
    atmosphere: &mut Atmosphere,
    controls: &mut OrbitControls,
) {
    let p = mode.preset();
    atmosphere.background = Rgb::from_hex(p.background);
    atmosphere.fog_density = p.fog_density;
    lights.key.intensity = p.key;
    lights.rim.intensity = p.rim;
    lights.ambient.intensity = p.ambient;
    lights.glow1.intensity = p.glow1;
    lights.glow2.intensity = p.glow2;
    controls.enabled = p.controls_enabled;
    if !p.controls_enabled {
        controls.end();
    }
}
