use serde::{Deserialize, Serialize};

/// One object entry in a level file.
///
/// Every field is optional in the wire format; missing fields take the
/// defaults below so hand-edited level files stay forgiving. Coordinates and
/// spans are grid cells, resolved to world units by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectDescriptor {
    /// Kind tag looked up in the object registry. Entries from the legacy
    /// format carry no tag and are treated as blocks.
    pub object: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Only meaningful for speed portals; `None` takes the standard
    /// multiplier at build time.
    pub speed_multiplier: Option<f32>,
}

impl Default for ObjectDescriptor {
    fn default() -> Self {
        Self {
            object: None,
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            speed_multiplier: None,
        }
    }
}

/// A single level: object entries in authoring order. The order is
/// load-bearing, collision resolution scans it front to back.
pub type Level = Vec<ObjectDescriptor>;

/// An ordered collection of levels, as loaded from a level file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Parse the on-disk format: a JSON array of levels, each an array of
    /// object entries.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let levels: Vec<Level> = serde_json::from_str(s)?;
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[ObjectDescriptor]> {
        self.levels.get(index).map(Vec::as_slice)
    }
}
