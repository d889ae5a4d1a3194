//! Tag bodies and their store.

use crate::math::Vec2;

pub const THEME_DARK: u8 = 0;
pub const THEME_ORANGE: u8 = 1;
pub const THEME_LIGHT: u8 = 2;

/// Visual style of a tag chip. The solver never reads it; it rides along
/// so hosts can restore the full card state from the engine alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TagTheme {
    Dark = THEME_DARK,
    Orange = THEME_ORANGE,
    Light = THEME_LIGHT,
}

impl TagTheme {
    pub fn from_u8(value: u8) -> Option<TagTheme> {
        match value {
            THEME_DARK => Some(TagTheme::Dark),
            THEME_ORANGE => Some(TagTheme::Orange),
            THEME_LIGHT => Some(TagTheme::Light),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One draggable tag chip.
///
/// `pos` is the top-left corner in container pixels. `size` stays (0, 0)
/// until the host has measured the tag's DOM element; unmeasured bodies
/// are ignored by every physics pass.
#[derive(Clone, Debug)]
pub struct TagBody {
    pub id: u32,
    pub label: String,
    pub theme: TagTheme,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub dragging: bool,
    pub sleeping: bool,
}

impl TagBody {
    pub fn new(label: &str, theme: TagTheme, w: f32, h: f32) -> Self {
        TagBody {
            id: 0,
            label: label.to_string(),
            theme,
            pos: Vec2::zero(),
            vel: Vec2::zero(),
            size: Vec2::new(w, h),
            dragging: false,
            sleeping: false,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Owns every tag body, in spawn order.
///
/// Ids start at 1 and are never reused; 0 is the invalid-id sentinel the
/// facade hands back on failed spawns.
pub struct BodyStore {
    bodies: Vec<TagBody>,
    next_id: u32,
}

impl BodyStore {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a body, assigning it the next id. Returns the id.
    pub fn insert(&mut self, mut body: TagBody) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: u32) -> Option<&TagBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut TagBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TagBody> {
        self.bodies.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [TagBody] {
        self.bodies.as_mut_slice()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The production tag set from the marketing site's contact card.
/// Handy as a demo fixture; real hosts pass their own labels.
pub fn demo_tags() -> [(&'static str, TagTheme); 13] {
    [
        ("From meh to wow!", TagTheme::Dark),
        ("No Editor? No Problem", TagTheme::Orange),
        ("Watch Time Wins", TagTheme::Dark),
        ("Low Views? Fixed", TagTheme::Dark),
        ("Conversion Boost", TagTheme::Orange),
        ("Viral Edits", TagTheme::Light),
        ("Retention Hacking", TagTheme::Dark),
        ("Sound Design", TagTheme::Dark),
        ("Color Grading", TagTheme::Dark),
        ("Storytelling", TagTheme::Orange),
        ("4K Delivery", TagTheme::Light),
        ("Thumbnail Design", TagTheme::Dark),
        ("Fast Turnaround", TagTheme::Dark),
    ]
}
