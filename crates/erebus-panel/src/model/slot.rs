//! Robot slots

use serde::Serialize;

/// One of the two robot positions in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Slot {
    Zero,
    One,
}

impl Slot {
    /// Both slots, in wire order.
    pub const ALL: [Slot; 2] = [Slot::Zero, Slot::One];

    /// Array index of this slot.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::Zero => 0,
            Slot::One => 1,
        }
    }

    /// Slot for an array index, if it is 0 or 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::Zero),
            1 => Some(Slot::One),
            _ => None,
        }
    }

    /// Suffix used in wire tags and DOM ids (`"0"` / `"1"`).
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Slot::Zero => "0",
            Slot::One => "1",
        }
    }

    /// Parse a wire suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "0" => Some(Slot::Zero),
            "1" => Some(Slot::One),
            _ => None,
        }
    }
}

/// Colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a colour, clamping each channel into `[0, 1]`.
    ///
    /// NaN channels become 0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Channels scaled to `0..=255`.
    pub fn to_bytes(self) -> [u8; 3] {
        [scale(self.r), scale(self.g), scale(self.b)]
    }

    /// CSS `rgb(...)` string.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("rgb({}, {}, {})", r, g, b)
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn scale(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// What the panel shows for one robot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RobotSlot {
    /// Controller name reported by the host while loaded
    pub name: Option<String>,
    /// Whether a controller is loaded (drives load/unload visibility)
    pub loaded: bool,
    /// Whether the robot is carrying a human
    pub human_loaded: bool,
    /// Colour of the carried activity, if any
    pub activity: Option<Rgb>,
}

impl RobotSlot {
    /// Record a loaded controller.
    pub fn load(&mut self, name: String) {
        self.name = Some(name);
        self.loaded = true;
    }

    /// Forget the loaded controller.
    pub fn unload(&mut self) {
        self.name = None;
        self.loaded = false;
    }
}
