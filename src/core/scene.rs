use super::constants::*;
use super::panel::{PanelId, PanelState};
use super::pointer::PointerSignal;
use glam::Vec2;

/// Discrete responsive policy; there is no interpolation between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

/// Clip polygon of a shard (maps 1:1 onto a stylesheet class).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShardShape {
    Sharp1,
    Sharp2,
    Sharp3,
    SharpV,
    SharpH,
    Shard1,
    Shard2,
    Shard3,
    Shard4,
    Polygon1,
    Polygon2,
    Polygon3,
    Polygon4,
}

impl ShardShape {
    pub fn css_class(self) -> &'static str {
        match self {
            ShardShape::Sharp1 => "clip-sharp-1",
            ShardShape::Sharp2 => "clip-sharp-2",
            ShardShape::Sharp3 => "clip-sharp-3",
            ShardShape::SharpV => "clip-sharp-v",
            ShardShape::SharpH => "clip-sharp-h",
            ShardShape::Shard1 => "clip-shard-1",
            ShardShape::Shard2 => "clip-shard-2",
            ShardShape::Shard3 => "clip-shard-3",
            ShardShape::Shard4 => "clip-shard-4",
            ShardShape::Polygon1 => "clip-polygon-1",
            ShardShape::Polygon2 => "clip-polygon-2",
            ShardShape::Polygon3 => "clip-polygon-3",
            ShardShape::Polygon4 => "clip-polygon-4",
        }
    }
}

/// Width/height in 4px grid units for each layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeClass {
    pub mobile: [u16; 2],
    pub desktop: [u16; 2],
}

impl SizeClass {
    const fn new(mobile_w: u16, desktop_w: u16, mobile_h: u16, desktop_h: u16) -> Self {
        Self {
            mobile: [mobile_w, mobile_h],
            desktop: [desktop_w, desktop_h],
        }
    }

    pub fn px(&self, layout: Layout) -> [f32; 2] {
        let [w, h] = match layout {
            Layout::Mobile => self.mobile,
            Layout::Desktop => self.desktop,
        };
        [w as f32 * 4.0, h as f32 * 4.0]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShardDescriptor {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub depth: f32,
    pub shape: ShardShape,
    pub size: SizeClass,
}

const fn shard(x: f32, y: f32, r: f32, d: f32, shape: ShardShape, size: SizeClass) -> ShardDescriptor {
    ShardDescriptor {
        offset: Vec2::new(x, y),
        rotation_deg: r,
        depth: d,
        shape,
        size,
    }
}

use ShardShape::*;

pub static DECORATIVE_SHARDS: [ShardDescriptor; 26] = [
    // top left
    shard(-180.0, -250.0, 15.0, 0.5, Sharp1, SizeClass::new(2, 6, 8, 20)),
    shard(-280.0, -150.0, -10.0, 1.2, Shard1, SizeClass::new(3, 5, 6, 12)),
    shard(-120.0, -350.0, 45.0, 0.8, Sharp2, SizeClass::new(2, 3, 10, 24)),
    shard(-380.0, -100.0, 20.0, 1.5, Shard2, SizeClass::new(4, 8, 4, 8)),
    shard(-80.0, -180.0, -45.0, 0.2, Sharp3, SizeClass::new(2, 4, 8, 16)),
    shard(-250.0, -300.0, 80.0, 1.8, Shard3, SizeClass::new(3, 6, 5, 10)),
    // top right
    shard(220.0, -200.0, -15.0, 0.6, Shard1, SizeClass::new(3, 6, 6, 14)),
    shard(320.0, -280.0, 30.0, 1.3, Sharp1, SizeClass::new(2, 4, 12, 28)),
    shard(160.0, -320.0, -20.0, 0.9, Shard4, SizeClass::new(4, 8, 4, 8)),
    shard(400.0, -120.0, 60.0, 1.6, Sharp2, SizeClass::new(2, 3, 8, 16)),
    shard(100.0, -140.0, 10.0, 0.3, Sharp3, SizeClass::new(3, 5, 6, 12)),
    shard(300.0, -50.0, -50.0, 1.1, Shard2, SizeClass::new(5, 10, 3, 6)),
    // bottom left
    shard(-200.0, 200.0, 25.0, 0.7, Sharp2, SizeClass::new(3, 6, 6, 12)),
    shard(-300.0, 300.0, -30.0, 1.4, Sharp1, SizeClass::new(2, 4, 10, 22)),
    shard(-140.0, 280.0, 50.0, 1.0, Shard3, SizeClass::new(4, 7, 5, 10)),
    shard(-420.0, 150.0, -15.0, 1.7, Sharp3, SizeClass::new(3, 5, 8, 16)),
    shard(-90.0, 350.0, 70.0, 1.3, Shard4, SizeClass::new(2, 4, 6, 12)),
    // bottom right
    shard(180.0, 250.0, -25.0, 0.6, Sharp3, SizeClass::new(3, 6, 6, 14)),
    shard(280.0, 180.0, 40.0, 1.3, Shard2, SizeClass::new(4, 8, 4, 8)),
    shard(140.0, 350.0, -50.0, 0.9, Sharp2, SizeClass::new(2, 4, 12, 24)),
    shard(380.0, 220.0, 15.0, 1.6, Sharp1, SizeClass::new(3, 6, 8, 16)),
    shard(250.0, 380.0, 80.0, 1.5, Shard1, SizeClass::new(2, 5, 5, 10)),
    // far slivers
    shard(0.0, -420.0, 90.0, 2.0, SharpV, SizeClass::new(1, 2, 12, 24)),
    shard(0.0, 420.0, 90.0, 2.0, SharpV, SizeClass::new(1, 2, 12, 24)),
    shard(-480.0, 0.0, 0.0, 2.0, SharpH, SizeClass::new(12, 24, 1, 2)),
    shard(480.0, 0.0, 0.0, 2.0, SharpH, SizeClass::new(12, 24, 1, 2)),
];

/// Resting placement of an interactive panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPlacement {
    pub id: PanelId,
    pub desktop: (Vec2, f32),
    pub mobile: (Vec2, f32),
    pub depth: f32,
    pub shape: ShardShape,
    pub size: SizeClass,
}

impl PanelPlacement {
    pub fn base(&self, layout: Layout) -> (Vec2, f32) {
        match layout {
            Layout::Desktop => self.desktop,
            Layout::Mobile => self.mobile,
        }
    }
}

pub static PANEL_PLACEMENTS: [PanelPlacement; 4] = [
    PanelPlacement {
        id: PanelId::About,
        desktop: (Vec2::new(-180.0, -140.0), -8.0),
        mobile: (Vec2::new(-80.0, -100.0), -4.0),
        depth: 1.0,
        shape: Polygon1,
        size: SizeClass::new(28, 40, 36, 52),
    },
    PanelPlacement {
        id: PanelId::Projects,
        desktop: (Vec2::new(200.0, -100.0), 6.0),
        mobile: (Vec2::new(80.0, -70.0), 4.0),
        depth: 2.0,
        shape: Polygon2,
        size: SizeClass::new(32, 48, 32, 48),
    },
    PanelPlacement {
        id: PanelId::Stack,
        desktop: (Vec2::new(-140.0, 180.0), 12.0),
        mobile: (Vec2::new(-70.0, 90.0), 8.0),
        depth: 3.0,
        shape: Polygon3,
        size: SizeClass::new(24, 36, 24, 36),
    },
    PanelPlacement {
        id: PanelId::Contact,
        desktop: (Vec2::new(180.0, 150.0), -6.0),
        mobile: (Vec2::new(70.0, 110.0), -4.0),
        depth: 4.0,
        shape: Polygon4,
        size: SizeClass::new(28, 40, 40, 52),
    },
];

#[inline]
pub fn placement(id: PanelId) -> &'static PanelPlacement {
    &PANEL_PLACEMENTS[id.index()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShardTransform {
    pub translate: Vec2,
    pub rotate_deg: f32,
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
    pub depth_px: f32,
}

impl ShardTransform {
    fn parallax(translate: Vec2, rotate_deg: f32, pointer: PointerSignal, strength: f32, depth_px: f32) -> Self {
        Self {
            translate,
            rotate_deg,
            tilt_x_deg: pointer.y * strength,
            tilt_y_deg: pointer.x * -strength,
            depth_px,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.1}deg) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({:.1}px)",
            self.translate.x,
            self.translate.y,
            self.rotate_deg,
            self.tilt_x_deg,
            self.tilt_y_deg,
            self.depth_px
        )
    }
}

pub fn decorative_transform(d: &ShardDescriptor, pointer: PointerSignal, layout: Layout) -> ShardTransform {
    let offset = match layout {
        Layout::Desktop => d.offset,
        Layout::Mobile => d.offset * Vec2::new(MOBILE_DECOR_SCALE_X, MOBILE_DECOR_SCALE_Y),
    };
    ShardTransform::parallax(
        offset,
        d.rotation_deg,
        pointer,
        DECOR_TILT_STRENGTH,
        d.depth * DECOR_DEPTH_PX,
    )
}

pub fn panel_transform(id: PanelId, pointer: PointerSignal, layout: Layout) -> ShardTransform {
    let p = placement(id);
    let (offset, rotation) = p.base(layout);
    ShardTransform::parallax(
        offset,
        rotation,
        pointer,
        PANEL_TILT_STRENGTH,
        p.depth * PANEL_DEPTH_PX,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Resting,
    Expanded,
    Receded,
}

impl Visibility {
    pub fn css_class(self) -> &'static str {
        match self {
            Visibility::Resting => "is-resting",
            Visibility::Expanded => "is-expanded",
            Visibility::Receded => "is-receded",
        }
    }
}

/// Everything the DOM layer needs to place one shard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShardStyle {
    /// `None` means the neutral, stage-filling placement.
    pub transform: Option<ShardTransform>,
    pub visibility: Visibility,
    pub delay_ms: f32,
}

const NEUTRAL_TRANSFORM: &str = "translate3d(0, 0, 0) rotateX(0deg) rotateY(0deg)";

impl ShardStyle {
    pub fn css_transform(&self) -> String {
        match &self.transform {
            Some(t) => t.to_css(),
            None => NEUTRAL_TRANSFORM.to_string(),
        }
    }

    pub fn css_transition(&self) -> String {
        format!(
            "all {}s {} {:.0}ms",
            TRANSITION_SECS, TRANSITION_EASING, self.delay_ms
        )
    }
}

pub fn decorative_style(
    d: &ShardDescriptor,
    pointer: PointerSignal,
    layout: Layout,
    state: PanelState,
) -> ShardStyle {
    let visibility = match state {
        PanelState::Idle => Visibility::Resting,
        PanelState::Active(_) => Visibility::Receded,
    };
    ShardStyle {
        transform: Some(decorative_transform(d, pointer, layout)),
        visibility,
        delay_ms: 0.0,
    }
}

pub fn panel_style(id: PanelId, pointer: PointerSignal, layout: Layout, state: PanelState) -> ShardStyle {
    match state {
        PanelState::Active(active) if active == id => ShardStyle {
            transform: None,
            visibility: Visibility::Expanded,
            delay_ms: 0.0,
        },
        PanelState::Active(_) => ShardStyle {
            transform: Some(panel_transform(id, pointer, layout)),
            visibility: Visibility::Receded,
            delay_ms: placement(id).depth * PANEL_STAGGER_MS,
        },
        PanelState::Idle => ShardStyle {
            transform: Some(panel_transform(id, pointer, layout)),
            visibility: Visibility::Resting,
            delay_ms: placement(id).depth * PANEL_STAGGER_MS,
        },
    }
}

/// Hero title block: drifts against the pointer, recedes behind open panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub offset: Vec2,
    pub receded: bool,
}

pub fn hero_style(pointer: PointerSignal, state: PanelState) -> HeroStyle {
    HeroStyle {
        offset: pointer.as_vec2() * -HERO_DRIFT_PX,
        receded: state != PanelState::Idle,
    }
}

/// One complete, pure layout pass over the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub layout: Layout,
    pub decorative: Vec<ShardStyle>,
    pub panels: [ShardStyle; 4],
    pub hero: HeroStyle,
}

pub fn compose(pointer: PointerSignal, layout: Layout, state: PanelState) -> SceneFrame {
    SceneFrame {
        layout,
        decorative: DECORATIVE_SHARDS
            .iter()
            .map(|d| decorative_style(d, pointer, layout, state))
            .collect(),
        panels: PanelId::ALL.map(|id| panel_style(id, pointer, layout, state)),
        hero: hero_style(pointer, state),
    }
}
