//! Edge-to-edge constraint layout.
//!
//! Each region declares one vertical link (its top or bottom edge tied to an
//! edge of the parent or of a sibling, plus a margin), a fixed height, and
//! horizontal insets from the parent. Links form a DAG that is solved once
//! per layout pass in dependency order.
//!
//! Solved rects live in the parent's coordinate space and may extend past
//! the parent's bottom; scrolling is the caller's concern.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use ratatui::layout::Rect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Region '{region}' is anchored to unknown region '{target}'")]
    UnknownAnchor { region: String, target: String },

    #[error("Region '{region}' is constrained twice")]
    Duplicate { region: String },

    #[error("Constraint cycle between regions: {}", regions.join(", "))]
    Cycle { regions: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<K> {
    Parent,
    Region(K),
}

/// An edge of the parent or a sibling, offset by `margin` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<K> {
    pub target: Target<K>,
    pub edge: Edge,
    pub margin: u16,
}

impl<K> Link<K> {
    pub fn parent_top() -> Self {
        Self {
            target: Target::Parent,
            edge: Edge::Top,
            margin: 0,
        }
    }

    pub fn below(region: K, margin: u16) -> Self {
        Self {
            target: Target::Region(region),
            edge: Edge::Bottom,
            margin,
        }
    }

    pub fn bottom_of(region: K) -> Self {
        Self {
            target: Target::Region(region),
            edge: Edge::Bottom,
            margin: 0,
        }
    }
}

/// Which edge of the constrained region is linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<K> {
    /// `region.top = link + margin`
    Top(Link<K>),
    /// `region.bottom = link - margin`
    Bottom(Link<K>),
}

impl<K: Copy> Anchor<K> {
    fn link(&self) -> &Link<K> {
        match self {
            Anchor::Top(link) | Anchor::Bottom(link) => link,
        }
    }

    /// Sibling this anchor depends on, if any.
    pub fn target(&self) -> Option<K> {
        match self.link().target {
            Target::Parent => None,
            Target::Region(key) => Some(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints<K> {
    pub anchor: Anchor<K>,
    pub height: u16,
    pub start_margin: u16,
    pub end_margin: u16,
}

impl<K> Constraints<K> {
    /// Full-width region whose top edge follows `link`.
    pub fn top(link: Link<K>, height: u16) -> Self {
        Self {
            anchor: Anchor::Top(link),
            height,
            start_margin: 0,
            end_margin: 0,
        }
    }

    /// Full-width region whose bottom edge follows `link`.
    pub fn bottom(link: Link<K>, height: u16) -> Self {
        Self {
            anchor: Anchor::Bottom(link),
            height,
            start_margin: 0,
            end_margin: 0,
        }
    }

    pub fn inset(mut self, start: u16, end: u16) -> Self {
        self.start_margin = start;
        self.end_margin = end;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ConstraintLayout<K> {
    entries: Vec<(K, Constraints<K>)>,
}

impl<K> Default for ConstraintLayout<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> ConstraintLayout<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn constrain(&mut self, region: K, constraints: Constraints<K>) -> &mut Self {
        self.entries.push((region, constraints));
        self
    }

    pub fn contains(&self, region: K) -> bool {
        self.entries.iter().any(|(key, _)| *key == region)
    }

    pub fn constraints(&self, region: K) -> Option<&Constraints<K>> {
        self.entries
            .iter()
            .find(|(key, _)| *key == region)
            .map(|(_, constraints)| constraints)
    }

    pub fn anchor(&self, region: K) -> Option<Anchor<K>> {
        self.constraints(region).map(|constraints| constraints.anchor)
    }

    /// Resolve every region inside `parent`.
    pub fn solve(&self, parent: Rect) -> Result<Solved<K>, LayoutError> {
        let mut index: HashMap<K, usize> = HashMap::with_capacity(self.entries.len());
        for (position, (region, _)) in self.entries.iter().enumerate() {
            if index.insert(*region, position).is_some() {
                return Err(LayoutError::Duplicate {
                    region: format!("{:?}", region),
                });
            }
        }

        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.entries.len()];
        let mut pending: Vec<usize> = vec![0; self.entries.len()];
        for (position, (region, constraints)) in self.entries.iter().enumerate() {
            if let Some(target) = constraints.anchor.target() {
                let Some(&dependency) = index.get(&target) else {
                    return Err(LayoutError::UnknownAnchor {
                        region: format!("{:?}", region),
                        target: format!("{:?}", target),
                    });
                };
                dependents[dependency].push(position);
                pending[position] += 1;
            }
        }

        let mut ready: VecDeque<usize> = (0..self.entries.len())
            .filter(|&position| pending[position] == 0)
            .collect();
        let mut rects: HashMap<K, Rect> = HashMap::with_capacity(self.entries.len());
        let mut order = Vec::with_capacity(self.entries.len());

        while let Some(position) = ready.pop_front() {
            let (region, constraints) = &self.entries[position];
            let rect = place(parent, constraints, &rects);
            rects.insert(*region, rect);
            order.push(*region);
            for &dependent in &dependents[position] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    ready.push_back(dependent);
                }
            }
        }

        if order.len() != self.entries.len() {
            let regions = self
                .entries
                .iter()
                .filter(|(region, _)| !rects.contains_key(region))
                .map(|(region, _)| format!("{:?}", region))
                .collect();
            return Err(LayoutError::Cycle { regions });
        }

        Ok(Solved {
            parent,
            rects,
            order,
        })
    }
}

fn place<K>(parent: Rect, constraints: &Constraints<K>, solved: &HashMap<K, Rect>) -> Rect
where
    K: Copy + Eq + Hash,
{
    let link = constraints.anchor.link();
    let reference = match link.target {
        Target::Parent => parent,
        // Dependencies are placed first; the lookup only misses on a bug.
        Target::Region(key) => solved.get(&key).copied().unwrap_or(parent),
    };
    let edge_y = match link.edge {
        Edge::Top => reference.y,
        Edge::Bottom => reference.y.saturating_add(reference.height),
    };
    let y = match constraints.anchor {
        Anchor::Top(_) => edge_y.saturating_add(link.margin),
        Anchor::Bottom(_) => edge_y
            .saturating_sub(link.margin)
            .saturating_sub(constraints.height),
    };
    let x = parent.x.saturating_add(constraints.start_margin);
    let width = parent
        .width
        .saturating_sub(constraints.start_margin)
        .saturating_sub(constraints.end_margin);
    Rect {
        x,
        y,
        width,
        height: constraints.height,
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone)]
pub struct Solved<K> {
    parent: Rect,
    rects: HashMap<K, Rect>,
    order: Vec<K>,
}

impl<K> Solved<K>
where
    K: Copy + Eq + Hash,
{
    pub fn rect(&self, region: K) -> Option<Rect> {
        self.rects.get(&region).copied()
    }

    /// Regions in the order they were placed.
    pub fn order(&self) -> &[K] {
        &self.order
    }

    /// Rows from the parent's top to the lowest region bottom.
    pub fn content_height(&self) -> u16 {
        self.rects
            .values()
            .map(|rect| rect.y.saturating_add(rect.height))
            .max()
            .unwrap_or(self.parent.y)
            .saturating_sub(self.parent.y)
    }
}
