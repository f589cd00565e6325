//! Control-overlay semantics: the seven affordances and what each one does
//! to a viewer handle. DOM construction lives on the web side; the
//! semantics live here so they test against a fake handle.

/// Step applied per click, in viewer units (degrees).
pub const CONTROL_STEP: f64 = 10.0;

/// Mutating surface of an instantiated panorama viewer.
pub trait ViewerHandle {
    fn yaw(&self) -> f64;
    fn set_yaw(&self, yaw: f64);
    fn pitch(&self) -> f64;
    fn set_pitch(&self, pitch: f64);
    fn hfov(&self) -> f64;
    fn set_hfov(&self, hfov: f64);
    fn toggle_fullscreen(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Fullscreen,
}

impl ControlAction {
    /// Construction order of the overlay children.
    pub const ALL: [ControlAction; 7] = [
        ControlAction::PanUp,
        ControlAction::PanDown,
        ControlAction::PanLeft,
        ControlAction::PanRight,
        ControlAction::ZoomIn,
        ControlAction::ZoomOut,
        ControlAction::Fullscreen,
    ];

    /// Role class, paired with `ctrl` on the overlay node.
    pub fn css_class(self) -> &'static str {
        match self {
            ControlAction::PanUp => "pan-up",
            ControlAction::PanDown => "pan-down",
            ControlAction::PanLeft => "pan-left",
            ControlAction::PanRight => "pan-right",
            ControlAction::ZoomIn => "zoom-in",
            ControlAction::ZoomOut => "zoom-out",
            ControlAction::Fullscreen => "fullscreen",
        }
    }

    /// Glyph shown inside the control.
    pub fn glyph(self) -> &'static str {
        match self {
            ControlAction::PanUp => "\u{25B2}",
            ControlAction::PanDown => "\u{25BC}",
            ControlAction::PanLeft => "\u{25C0}",
            ControlAction::PanRight => "\u{25B6}",
            ControlAction::ZoomIn => "+",
            ControlAction::ZoomOut => "\u{2212}",
            ControlAction::Fullscreen => "\u{2922}",
        }
    }

    /// Apply this action to a viewer. Zoom-in narrows the field of view.
    pub fn apply(self, viewer: &dyn ViewerHandle) {
        match self {
            ControlAction::PanUp => viewer.set_pitch(viewer.pitch() + CONTROL_STEP),
            ControlAction::PanDown => viewer.set_pitch(viewer.pitch() - CONTROL_STEP),
            ControlAction::PanLeft => viewer.set_yaw(viewer.yaw() - CONTROL_STEP),
            ControlAction::PanRight => viewer.set_yaw(viewer.yaw() + CONTROL_STEP),
            ControlAction::ZoomIn => viewer.set_hfov(viewer.hfov() - CONTROL_STEP),
            ControlAction::ZoomOut => viewer.set_hfov(viewer.hfov() + CONTROL_STEP),
            ControlAction::Fullscreen => viewer.toggle_fullscreen(),
        }
    }
}
