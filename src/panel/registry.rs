//! Attached tabs and detached floating panels
//!
//! The registry is the single source of truth for which panels exist and
//! where they live. A name is either attached (in `tabs`, at a contiguous
//! index) or detached (in the floating map), never both.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::DockError;
use crate::view::geometry::Point;

use super::icon::Icon;

/// An attached panel with a visible label in the strip
#[derive(Debug, Clone)]
pub struct Tab<C> {
    /// Position in the strip, reassigned on every insert/remove/move
    pub index: usize,
    /// Display label, also the unique key
    pub name: String,
    pub icon: Option<Icon>,
    /// Caller-owned content, moved around but never inspected
    pub content: C,
    /// Protected tabs never show a close box
    pub closable: bool,
}

/// A detached panel hosted in its own top-level window
#[derive(Debug, Clone)]
pub struct FloatingPanel<C> {
    pub name: String,
    pub content: C,
    /// Strip index the tab occupied right before detachment
    pub origin_index: usize,
    pub icon: Option<Icon>,
    pub closable: bool,
    /// Screen point the panel was torn off at
    pub position: Point,
}

/// Content handed back when a panel is removed for good
#[derive(Debug)]
pub struct RemovedPanel<C> {
    pub name: String,
    pub content: C,
    /// Whether the panel was floating (its window must be closed)
    pub was_floating: bool,
}

/// Container-wide reattachment and protection settings
#[derive(Debug, Clone, Default)]
pub struct ReattachPolicy {
    /// Reattach at the origin index instead of appending
    pub preserve_origin_index: bool,
    /// Every tab in this container is non-closable
    pub protect_all: bool,
    /// Names that are always non-closable once attached
    pub protected_names: BTreeSet<String>,
    /// Icons pixel-identical to this are dropped on reattach
    pub default_icon: Option<Icon>,
}

impl ReattachPolicy {
    pub fn is_protected(&self, name: &str) -> bool {
        self.protect_all || self.protected_names.contains(name)
    }
}

/// Ordered attached tabs plus the map of detached floating panels
#[derive(Debug, Clone)]
pub struct TabRegistry<C> {
    tabs: Vec<Tab<C>>,
    detached: BTreeMap<String, FloatingPanel<C>>,
    policy: ReattachPolicy,
}

impl<C> Default for TabRegistry<C> {
    fn default() -> Self {
        Self::new(ReattachPolicy::default())
    }
}

impl<C> TabRegistry<C> {
    pub fn new(policy: ReattachPolicy) -> Self {
        Self {
            tabs: Vec::new(),
            detached: BTreeMap::new(),
            policy,
        }
    }

    // === Policy ===

    pub fn set_protected_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.protected_names = names.into_iter().map(Into::into).collect();
    }

    pub fn set_preserve_origin_index(&mut self, preserve: bool) {
        self.policy.preserve_origin_index = preserve;
    }

    pub fn set_protect_all(&mut self, protect_all: bool) {
        self.policy.protect_all = protect_all;
    }

    pub fn set_default_icon(&mut self, icon: Option<Icon>) {
        self.policy.default_icon = icon;
    }

    // === Queries ===

    /// Number of attached tabs
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&Tab<C>> {
        self.tabs.get(index)
    }

    pub fn tab_by_name(&self, name: &str) -> Option<&Tab<C>> {
        self.tabs.iter().find(|t| t.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.name == name)
    }

    pub fn is_detached(&self, name: &str) -> bool {
        self.detached.contains_key(name)
    }

    /// Whether `name` is known at all (attached or detached)
    pub fn contains(&self, name: &str) -> bool {
        self.is_detached(name) || self.index_of(name).is_some()
    }

    pub fn floating(&self, name: &str) -> Option<&FloatingPanel<C>> {
        self.detached.get(name)
    }

    /// Names of detached panels in sorted order
    pub fn detached_names(&self) -> Vec<String> {
        self.detached.keys().cloned().collect()
    }

    pub fn tab_names(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.name.clone()).collect()
    }

    // === Mutations ===

    /// Insert a new tab at `at` (clamped) or append; returns its index
    pub fn insert(
        &mut self,
        at: Option<usize>,
        name: impl Into<String>,
        icon: Option<Icon>,
        content: C,
        closable: bool,
    ) -> Result<usize, DockError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(DockError::DuplicateName(name));
        }

        let index = at.map_or(self.tabs.len(), |i| i.min(self.tabs.len()));
        let closable = closable && !self.policy.is_protected(&name);
        tracing::debug!(%name, index, closable, "insert tab");

        self.tabs.insert(
            index,
            Tab {
                index,
                name,
                icon,
                content,
                closable,
            },
        );
        self.reindex();
        Ok(index)
    }

    /// Remove a panel wherever it lives and hand its content back
    pub fn remove_by_name(&mut self, name: &str) -> Result<RemovedPanel<C>, DockError> {
        if let Some(panel) = self.detached.remove(name) {
            tracing::debug!(name, "remove floating panel");
            return Ok(RemovedPanel {
                name: panel.name,
                content: panel.content,
                was_floating: true,
            });
        }

        let index = self
            .index_of(name)
            .ok_or_else(|| DockError::NotFound(name.to_string()))?;
        let tab = self.tabs.remove(index);
        self.reindex();
        tracing::debug!(name, index, "remove tab");
        Ok(RemovedPanel {
            name: tab.name,
            content: tab.content,
            was_floating: false,
        })
    }

    /// Tear the tab at `index` off into a floating panel at `screen_pos`
    pub fn detach(
        &mut self,
        index: usize,
        screen_pos: Point,
    ) -> Result<&FloatingPanel<C>, DockError> {
        if index >= self.tabs.len() {
            return Err(DockError::ProtocolViolation(format!(
                "detach index {index} out of range (count {})",
                self.tabs.len()
            )));
        }

        let tab = self.tabs.remove(index);
        self.reindex();
        tracing::debug!(name = %tab.name, origin_index = index, "detach tab");

        let name = tab.name.clone();
        let panel = FloatingPanel {
            name: tab.name,
            content: tab.content,
            origin_index: index,
            icon: tab.icon,
            closable: tab.closable,
            position: screen_pos,
        };
        let panel = self.detached.entry(name).or_insert(panel);
        Ok(&*panel)
    }

    /// Bring a floating panel back into the strip; returns its new index
    ///
    /// An explicit `insert_at` (a drop on an existing tab) wins over the
    /// preserve-origin setting; without either the tab is appended.
    pub fn reattach(&mut self, name: &str, insert_at: Option<usize>) -> Result<usize, DockError> {
        let panel = self
            .detached
            .remove(name)
            .ok_or_else(|| DockError::NotFound(name.to_string()))?;

        let count = self.tabs.len();
        let index = match insert_at {
            Some(i) => i.min(count),
            None if self.policy.preserve_origin_index => panel.origin_index.min(count),
            None => count,
        };

        let icon = panel.icon.filter(|icon| {
            !self
                .policy
                .default_icon
                .as_ref()
                .is_some_and(|default| default.pixel_eq(icon))
        });

        let protected = self.policy.is_protected(&panel.name);
        let closable = panel.closable && !protected;

        tracing::debug!(name, index, closable, "reattach panel");
        self.tabs.insert(
            index,
            Tab {
                index,
                name: panel.name,
                icon,
                content: panel.content,
                closable,
            },
        );
        self.reindex();

        if self.policy.preserve_origin_index && !self.policy.protected_names.is_empty() {
            self.reapply_protection();
        }

        Ok(index)
    }

    /// Move the tab at `from` to `to`; `to` past the end means the last slot
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<usize, DockError> {
        if from >= self.tabs.len() {
            return Err(DockError::ProtocolViolation(format!(
                "move source {from} out of range (count {})",
                self.tabs.len()
            )));
        }
        let to = to.min(self.tabs.len() - 1);
        if from == to {
            return Ok(to);
        }

        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.reindex();
        tracing::debug!(from, to, "move tab");
        Ok(to)
    }

    /// Update the screen position recorded for a floating panel
    pub fn set_floating_position(&mut self, name: &str, position: Point) {
        if let Some(panel) = self.detached.get_mut(name) {
            panel.position = position;
        }
    }

    /// Verify contiguous indices and exclusive, unique membership
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = BTreeSet::new();
        for (i, tab) in self.tabs.iter().enumerate() {
            if tab.index != i {
                return Err(format!("tab '{}' at slot {i} has index {}", tab.name, tab.index));
            }
            if !seen.insert(tab.name.as_str()) {
                return Err(format!("tab '{}' attached twice", tab.name));
            }
        }
        for (key, panel) in &self.detached {
            if key != &panel.name {
                return Err(format!("floating panel '{}' keyed as '{key}'", panel.name));
            }
            if seen.contains(key.as_str()) {
                return Err(format!("'{key}' is both attached and detached"));
            }
        }
        Ok(())
    }

    /// Force every attached tab on the protected list to be non-closable
    fn reapply_protection(&mut self) {
        for tab in &mut self.tabs {
            if self.policy.protected_names.contains(&tab.name) {
                tab.closable = false;
            }
        }
    }

    fn reindex(&mut self) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.index = i;
        }
    }
}
