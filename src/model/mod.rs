//! Container model - the complete state of one detachable panel container
//!
//! Each container owns its registry, strip gesture state and floating
//! windows; two containers in one application share nothing.
//!
//! The methods here are the collaborator-facing API. Pointer input goes
//! through `update()` instead.

use std::collections::BTreeMap;

use crate::commands::{Cmd, ContainerEvent};
use crate::config::DockConfig;
use crate::error::DockError;
use crate::floating::FloatingWindow;
use crate::panel::{Icon, RemovedPanel, Tab, TabRegistry};
use crate::strip::TabStrip;
use crate::view::geometry::{ContainerLayout, Point, Size};
use crate::view::hit_test::{hit_test_container, HitTarget};

/// The complete container model
#[derive(Debug)]
pub struct DockModel<C> {
    /// Attached tabs and detached panels
    pub registry: TabRegistry<C>,
    /// Pointer gesture state of the tab strip
    pub strip: TabStrip,
    /// Window-local layout of strip and content
    pub layout: ContainerLayout,
    /// Screen position of the container's client-area origin
    pub screen_origin: Point,
    /// One entry per detached panel, keyed by panel name
    pub floating: BTreeMap<String, FloatingWindow>,
    /// Currently active tab
    pub active_index: Option<usize>,
    /// Configuration this container was built from
    pub config: DockConfig,
}

impl<C> DockModel<C> {
    /// Create an empty container of `size` configured by `config`
    pub fn new(config: DockConfig, size: Size) -> Self {
        Self {
            registry: TabRegistry::new(config.reattach_policy()),
            strip: TabStrip::new(config.strip_options()),
            layout: ContainerLayout::new(size, config.strip_height, config.tab_width),
            screen_origin: Point::default(),
            floating: BTreeMap::new(),
            active_index: None,
            config,
        }
    }

    // === Collaborator API ===

    /// Add a panel; `at` beyond the end appends
    pub fn insert_panel(
        &mut self,
        name: impl Into<String>,
        icon: Option<Icon>,
        content: C,
        closable: bool,
        at: Option<usize>,
    ) -> Result<usize, DockError> {
        let index = self.registry.insert(at, name, icon, content, closable)?;
        self.active_index = match self.active_index {
            None => Some(index),
            Some(active) if index <= active => Some(active + 1),
            keep => keep,
        };
        Ok(index)
    }

    /// Remove a panel for good, attached or floating
    ///
    /// The content is handed back; the returned command closes the panel's
    /// floating window when it had one.
    pub fn remove_panel(&mut self, name: &str) -> Result<(RemovedPanel<C>, Option<Cmd>), DockError> {
        let index = self.registry.index_of(name);
        let removed = self.registry.remove_by_name(name)?;

        if removed.was_floating {
            self.floating.remove(name);
            let cmd = Cmd::batch([
                Cmd::CloseFloatingWindow {
                    name: removed.name.clone(),
                },
                Cmd::Redraw,
            ]);
            return Ok((removed, cmd));
        }

        let mut cmds = vec![Cmd::Redraw];
        if let Some(index) = index {
            if let Some(event) = self.tab_removed(index) {
                cmds.push(Cmd::Notify(event));
            }
        }
        Ok((removed, Cmd::batch(cmds)))
    }

    pub fn set_protected_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.set_protected_names(names);
    }

    pub fn set_preserve_origin_index(&mut self, preserve: bool) {
        self.registry.set_preserve_origin_index(preserve);
    }

    pub fn set_protect_all(&mut self, protect_all: bool) {
        self.registry.set_protect_all(protect_all);
    }

    /// Icon that reattached tabs drop when theirs is pixel-identical
    pub fn set_default_icon(&mut self, icon: Option<Icon>) {
        self.registry.set_default_icon(icon);
    }

    /// Reattach every floating panel and close its window
    ///
    /// Called before the application exits so no content is left inside an
    /// orphaned floating frame.
    pub fn close_all_floating(&mut self) -> Option<Cmd> {
        crate::update::coordinator::close_all_floating(self)
    }

    // === Queries ===

    pub fn active_tab(&self) -> Option<&Tab<C>> {
        self.active_index.and_then(|i| self.registry.tab(i))
    }

    /// Content of the active tab
    pub fn active_content(&self) -> Option<&C> {
        self.active_tab().map(|t| &t.content)
    }

    /// Content of a panel wherever it currently lives
    pub fn content(&self, name: &str) -> Option<&C> {
        self.registry
            .tab_by_name(name)
            .map(|t| &t.content)
            .or_else(|| self.registry.floating(name).map(|p| &p.content))
    }

    /// Hit-test a window-local point against the current tabs
    pub fn hit_test(&self, pos: Point) -> HitTarget {
        hit_test_container(&self.layout, self.registry.tabs(), pos)
    }

    pub fn floating_window(&self, name: &str) -> Option<&FloatingWindow> {
        self.floating.get(name)
    }

    // === Active tab bookkeeping ===

    /// Adjust the active index after the tab at `index` went away
    ///
    /// Returns an activation event when a different tab became active.
    pub(crate) fn tab_removed(&mut self, index: usize) -> Option<ContainerEvent> {
        let count = self.registry.len();
        let Some(active) = self.active_index else {
            return None;
        };

        if count == 0 {
            self.active_index = None;
            return None;
        }

        if active == index {
            let next = index.min(count - 1);
            self.active_index = Some(next);
            Some(ContainerEvent::TabActivated(next))
        } else {
            if active > index {
                self.active_index = Some(active - 1);
            }
            None
        }
    }

    /// Keep the active index pointing at the same tab across a move
    pub(crate) fn tab_moved(&mut self, from: usize, to: usize) {
        let Some(active) = self.active_index else {
            return;
        };
        self.active_index = Some(if active == from {
            to
        } else if from < active && active <= to {
            active - 1
        } else if to <= active && active < from {
            active + 1
        } else {
            active
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(names: &[&str]) -> DockModel<u32> {
        let mut model = DockModel::new(DockConfig::default(), Size::new(800.0, 600.0));
        for (i, name) in names.iter().enumerate() {
            model.insert_panel(*name, None, i as u32, true, None).unwrap();
        }
        model
    }

    #[test]
    fn test_first_insert_becomes_active() {
        let model = model(&["A", "B"]);
        assert_eq!(model.active_index, Some(0));
        assert_eq!(model.active_content(), Some(&0));
    }

    #[test]
    fn test_insert_before_active_shifts_it() {
        let mut model = model(&["A", "B"]);
        model.active_index = Some(1);
        model.insert_panel("Z", None, 9, true, Some(0)).unwrap();
        assert_eq!(model.active_tab().map(|t| t.name.as_str()), Some("B"));
    }

    #[test]
    fn test_remove_active_activates_neighbor() {
        let mut model = model(&["A", "B", "C"]);
        model.active_index = Some(2);
        let (removed, cmd) = model.remove_panel("C").unwrap();
        assert_eq!(removed.content, 2);
        assert_eq!(model.active_index, Some(1));
        let cmd = cmd.unwrap();
        assert_eq!(cmd.events(), vec![&ContainerEvent::TabActivated(1)]);
    }

    #[test]
    fn test_remove_last_clears_active() {
        let mut model = model(&["A"]);
        model.remove_panel("A").unwrap();
        assert_eq!(model.active_index, None);
    }

    #[test]
    fn test_remove_unknown_leaves_state() {
        let mut model = model(&["A"]);
        assert!(matches!(
            model.remove_panel("B"),
            Err(DockError::NotFound(_))
        ));
        assert_eq!(model.registry.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_reports_error() {
        let mut model = model(&["A"]);
        let err = model.insert_panel("A", None, 5, true, None).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(model.registry.len(), 1);
    }

    #[test]
    fn test_tab_moved_tracks_active() {
        let mut model = model(&["A", "B", "C", "D"]);
        model.active_index = Some(1);
        model.tab_moved(1, 3);
        assert_eq!(model.active_index, Some(3));

        model.active_index = Some(2);
        model.tab_moved(0, 3);
        assert_eq!(model.active_index, Some(1));

        model.active_index = Some(1);
        model.tab_moved(3, 0);
        assert_eq!(model.active_index, Some(2));
    }

    #[test]
    fn test_content_lookup_follows_panel() {
        let mut model = model(&["A", "B"]);
        model.registry.detach(1, Point::default()).unwrap();
        assert_eq!(model.content("B"), Some(&1));
        assert_eq!(model.content("A"), Some(&0));
        assert_eq!(model.content("C"), None);
    }

    #[test]
    fn test_independent_containers() {
        let mut first = model(&["A"]);
        let second = model(&["A"]);
        first.registry.detach(0, Point::default()).unwrap();
        assert!(first.registry.is_detached("A"));
        assert!(!second.registry.is_detached("A"));
        assert_eq!(second.registry.len(), 1);
    }
}
