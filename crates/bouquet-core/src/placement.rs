//! Placement store: the ordered set of flowers placed on the canvas.
//!
//! [`Bouquet`] is an immutable snapshot. Every operation returns a new
//! snapshot; an operation that changes nothing returns a snapshot sharing the
//! same allocation, so observers can detect change with [`Bouquet::ptr_eq`].

use std::fmt;
use std::rc::Rc;

use rand::Rng;

use crate::catalog::Catalog;
use crate::config::PoseRanges;

/// Unique identifier for a placed flower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacementId(u64);

impl PlacementId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flower-{}", self.0)
    }
}

/// Position in percent of the canvas width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One flower instance on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: PlacementId,
    /// Catalog key of the flower kind.
    pub type_id: String,
    pub position: Position,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale: f64,
    /// Stacking order; later placements sit above earlier ones.
    pub stack_order: u32,
}

/// Snapshot of all placed flowers, in insertion order.
#[derive(Debug, Clone)]
pub struct Bouquet {
    items: Rc<[PlacedItem]>,
    next_id: u64,
}

impl Default for Bouquet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Bouquet {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.next_id == other.next_id && self.items == other.items)
    }
}

impl Bouquet {
    /// Creates an empty bouquet.
    pub fn new() -> Self {
        Self {
            items: Rc::from(Vec::new()),
            next_id: 1,
        }
    }

    fn with_items(&self, items: Vec<PlacedItem>, next_id: u64) -> Self {
        Self {
            items: Rc::from(items),
            next_id,
        }
    }

    /// Returns true if both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn get(&self, id: PlacementId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places a new flower of `kind` near the canvas center with a random pose.
    ///
    /// Unknown kinds leave the bouquet unchanged. `pose` is normalized first,
    /// so hand-built ranges never make sampling panic.
    pub fn add<R: Rng>(
        &self,
        catalog: &Catalog,
        kind: &str,
        pose: &PoseRanges,
        rng: &mut R,
    ) -> Self {
        if !catalog.contains(kind) {
            tracing::debug!(kind, "Ignoring unknown flower kind");
            return self.clone();
        }

        let id = PlacementId(self.next_id);
        // Equals len + 1 until something is removed; after that it keeps
        // growing so a new flower never shares a layer with an older one.
        let stack_order = self
            .items
            .iter()
            .map(|item| item.stack_order)
            .max()
            .map_or(1, |top| top + 1);

        let pose = pose.normalized();
        let jitter = pose.position_jitter;
        let item = PlacedItem {
            id,
            type_id: kind.to_string(),
            position: Position::new(
                pose.center + rng.random_range(-jitter..=jitter),
                pose.center + rng.random_range(-jitter..=jitter),
            ),
            rotation: rng.random_range(-pose.max_rotation..=pose.max_rotation),
            scale: rng.random_range(pose.min_scale..=pose.max_scale),
            stack_order,
        };
        tracing::debug!(%id, kind, stack_order, "Placed flower");

        let mut items = self.items.to_vec();
        items.push(item);
        self.with_items(items, self.next_id + 1)
    }

    /// Removes the flower with `id`, if present.
    pub fn remove(&self, id: PlacementId) -> Self {
        if self.get(id).is_none() {
            return self.clone();
        }

        tracing::debug!(%id, "Removed flower");
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        self.with_items(items, self.next_id)
    }

    /// Moves the flower with `id` to `(x, y)` percent. No clamping is applied;
    /// non-finite coordinates are ignored.
    pub fn move_to(&self, id: PlacementId, x: f64, y: f64) -> Self {
        let position = Position::new(x, y);
        if !position.is_finite() {
            tracing::debug!(%id, x, y, "Ignoring non-finite move");
            return self.clone();
        }
        if self.get(id).is_none() {
            return self.clone();
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    PlacedItem {
                        position,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        self.with_items(items, self.next_id)
    }

    /// Removes every flower. Ids are not reused afterwards.
    pub fn clear(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        self.with_items(Vec::new(), self.next_id)
    }
}
