//! A context menu is a menu that appears upon user interaction, such as a
//! right-click, and nests submenus without limit.
//!
//! [`ContextMenu`] owns the live [`Session`], if any, and every effect that
//! may outlive it. Each open request supersedes the previous session under a
//! new [`Generation`]; timers and host callbacks tagged with an older
//! generation are ignored.
//!
//! # Example
//!
//! ```
//! use icy_menu_core::menu::MenuItem;
//! use icy_menu_core::time::{Instant, milliseconds};
//! use icy_menu_core::{Point, Settings, Size};
//! use icy_menu_widget::ContextMenu;
//!
//! let mut menu = ContextMenu::new(Settings::default(), Size::new(800.0, 600.0));
//!
//! let _ = menu.open(
//!     Point::new(40.0, 40.0),
//!     vec![
//!         MenuItem::new("copy", "Copy"),
//!         MenuItem::submenu("share", "Share", [MenuItem::new("mail", "Mail")]),
//!     ],
//! );
//!
//! let share = menu.layers()[0].items[1].bounds;
//! assert!(menu.hover(0, "share", share));
//! assert_eq!(menu.layers().len(), 2);
//!
//! let start = Instant::now();
//! assert!(menu.close_graceful(start));
//!
//! let _ = menu.tick(start + milliseconds(25));
//! assert_eq!(menu.layers().len(), 1);
//!
//! let _ = menu.tick(start + milliseconds(150));
//! assert!(!menu.is_open());
//! ```
use super::choreographer::{CloseChoreographer, Phase, Step};
use super::hover::LevelState;
use super::layer::{self, Context, ItemLayout, LayerTag, MenuLayer};
use super::position::{self, Direction};
use super::session::Session;
use crate::core::menu::{self, MenuItem};
use crate::core::settings::CloseMode;
use crate::core::time::Instant;
use crate::core::{Point, Rectangle, Settings, Size};
use crate::runtime::{Generation, SessionGate};

use rustc_hash::FxHashMap;

use std::fmt;

/// A change in the visibility of a [`ContextMenu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// A session was opened.
    Opened(Generation),
    /// A session was closed.
    Closed(Generation),
}

/// What lies under a point of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    /// No live layer.
    Outside,
    /// A live layer, between its items.
    Layer(LayerTag),
    /// An item of a live layer.
    Item(LayerTag, ItemLayout),
}

/// A nested context menu.
pub struct ContextMenu {
    settings: Settings,
    viewport: Size,
    gate: SessionGate,
    session: Option<Session>,
    choreographer: CloseChoreographer,
    exiting: Vec<MenuLayer>,
    measured: FxHashMap<LayerTag, Size>,
    on_visibility: Option<Box<dyn FnMut(Visibility)>>,
}

impl ContextMenu {
    /// Creates a closed [`ContextMenu`] for a viewport of the given size.
    ///
    /// Invalid [`Settings`] are kept but logged. A root close delay shorter
    /// than the children delay is stretched to match it.
    pub fn new(settings: Settings, viewport: Size) -> Self {
        if let Err(error) = settings.validate() {
            log::warn!("Using invalid menu settings: {error}");
        }

        Self {
            settings,
            viewport,
            gate: SessionGate::new(),
            session: None,
            choreographer: CloseChoreographer::new(),
            exiting: Vec::new(),
            measured: FxHashMap::default(),
            on_visibility: None,
        }
    }

    /// Sets the callback notified whenever a session opens or closes.
    #[must_use]
    pub fn on_visibility(mut self, on_visibility: impl FnMut(Visibility) + 'static) -> Self {
        self.on_visibility = Some(Box::new(on_visibility));
        self
    }

    /// Returns the [`Settings`] of the menu.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the size of the viewport.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Updates the size of the viewport, clamping the open root menu again.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reposition_root();
    }

    /// Opens the menu at `pointer` with the given items.
    ///
    /// A live menu is superseded: its timers are cancelled and its layers
    /// start exiting while the new menu enters. Returns the [`Generation`] of
    /// the new session, or `None` if `items` is empty and nothing is shown.
    pub fn open(&mut self, pointer: Point, items: Vec<MenuItem>) -> Option<Generation> {
        let previous = self.gate.current();
        let _ = self.teardown(true);

        let generation = self.gate.advance();
        self.exiting.retain(|layer| layer.tag.generation == previous);

        if items.is_empty() {
            log::debug!("Ignored open request {generation} without items");
            return None;
        }

        let size = menu::estimate_size(&items, &self.settings.metrics);
        let root_position = position::resolve_root_position(
            pointer,
            size,
            self.viewport,
            self.settings.placement.margin,
        );

        log::debug!(
            "Opened session {generation} at {pointer:?} (root at {root_position:?}, {} items)",
            items.len()
        );

        self.session = Some(Session::new(generation, pointer, root_position, items));
        self.notify(Visibility::Opened(generation));

        Some(generation)
    }

    /// Records `key` as the hovered item of `level`.
    ///
    /// Nothing happens while the menu is closing, or if the item is disabled
    /// or not listed at `level`. Submenus below a replaced item start exiting.
    /// Returns whether the hover state changed.
    pub fn hover(&mut self, level: usize, key: &str, rect: Rectangle) -> bool {
        let Some(session) = &self.session else {
            return false;
        };

        if session.is_closing() {
            return false;
        }

        let Some(item) = session.item(level, key).filter(|item| !item.disabled) else {
            return false;
        };

        let key = item.key.clone();
        let before = self.layers();

        let Some(session) = &mut self.session else {
            return false;
        };

        log::trace!("Hovering {key} at level {level}");

        if !session.hover.hover(level, key, rect) {
            return false;
        }

        self.retire(before);

        true
    }

    /// Selects the item with `key` at `level`.
    ///
    /// Enabled leaf items fire their callback and close the menu at once.
    /// Submenu triggers and disabled items are left alone. Returns whether
    /// the item was selected.
    pub fn select(&mut self, level: usize, key: &str) -> bool {
        let Some(session) = &self.session else {
            return false;
        };

        if !session.item(level, key).is_some_and(MenuItem::activate) {
            return false;
        }

        log::debug!(
            "Selected {key} at level {level} of session {}",
            session.generation
        );

        let _ = self.close_immediate();

        true
    }

    /// Closes the menu at once, without any exit.
    ///
    /// Cancels every pending timer. Closing a closed menu does nothing.
    /// Returns whether a session was closed.
    pub fn close_immediate(&mut self) -> bool {
        self.teardown(false)
    }

    /// Starts the close sequence at `now`.
    ///
    /// Only an open menu with a hovered item runs the sequence; without any
    /// hover this is the same as [`close_immediate`](Self::close_immediate).
    /// A menu that is already closing is left alone. Returns whether anything
    /// changed.
    pub fn close_graceful(&mut self, now: Instant) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };

        if session.phase != Phase::Open {
            return false;
        }

        if !session.hover.any_hovered() {
            return self.close_immediate();
        }

        self.choreographer
            .begin(session, now, &self.settings.timing);

        log::debug!("Closing session {} gracefully", session.generation);

        true
    }

    /// Closes the menu with the given [`CloseMode`].
    pub fn close(&mut self, mode: CloseMode, now: Instant) -> bool {
        match mode {
            CloseMode::Graceful => self.close_graceful(now),
            CloseMode::Immediate => self.close_immediate(),
        }
    }

    /// Applies every close step due at `now`. Returns whether any was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Some(step) = self.choreographer.next_due(now, &self.gate) {
            log::trace!("Applying {step:?} of session {}", self.gate.current());

            match step {
                Step::RetractChildren => self.retract_children(),
                Step::HideRoot => {
                    let _ = self.teardown(true);
                }
            }

            changed = true;
        }

        if let Some(session) = &mut self.session {
            self.choreographer.forget_fired(session);
        }

        changed
    }

    /// Returns when [`tick`](Self::tick) should be called next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.choreographer.next_deadline()
    }

    /// Resolves the live layers of the menu, root first.
    pub fn layers(&self) -> Vec<MenuLayer> {
        let Some(session) = &self.session else {
            return Vec::new();
        };

        let context = Context {
            levels: session.levels(),
            settings: &self.settings,
            viewport: self.viewport,
            measured: &self.measured,
        };

        layer::resolve_menu_tree(
            &session.items,
            LayerTag::root(session.generation),
            session.root_position,
            Direction::Right,
            &context,
        )
    }

    /// Returns the layers playing their exit, oldest first.
    pub fn exiting_layers(&self) -> &[MenuLayer] {
        &self.exiting
    }

    /// Notifies the menu that the exit of the layer with `tag` finished.
    ///
    /// Returns false if no such layer was exiting.
    pub fn exit_finished(&mut self, tag: &LayerTag) -> bool {
        let Some(index) = self.exiting.iter().position(|layer| &layer.tag == tag) else {
            return false;
        };

        let _ = self.exiting.remove(index);

        true
    }

    /// Reports the measured size of the layer with `tag`.
    ///
    /// The size replaces the estimate for the rest of the session. Reports
    /// from layers of a superseded session are ignored. Returns whether the
    /// size was recorded.
    pub fn report_size(&mut self, tag: &LayerTag, size: Size) -> bool {
        if self.session.is_none() || !self.gate.is_current(tag.generation) {
            log::trace!("Ignored size report of stale layer {tag:?}");
            return false;
        }

        if self.measured.get(tag) == Some(&size) {
            return false;
        }

        let _ = self.measured.insert(tag.clone(), size);

        if tag.level == 0 {
            self.reposition_root();
        }

        true
    }

    /// Returns what lies under `point`, looking at the deepest layers first.
    pub fn hit_test(&self, point: Point) -> Hit {
        let Some(layer) = self
            .layers()
            .into_iter()
            .rev()
            .find(|layer| layer.bounds.contains(point))
        else {
            return Hit::Outside;
        };

        let item = layer.item_at(point).cloned();

        match item {
            Some(item) => Hit::Item(layer.tag, item),
            None => Hit::Layer(layer.tag),
        }
    }

    /// Returns true if `point` lies inside a live layer.
    pub fn contains(&self, point: Point) -> bool {
        !matches!(self.hit_test(point), Hit::Outside)
    }

    /// Returns true if a session is live, closing or not.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true while a close sequence is running.
    pub fn is_closing(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_closing)
    }

    /// Returns the [`Phase`] of the menu.
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Closed, Session::phase)
    }

    /// Returns the [`Generation`] of the latest session.
    pub fn generation(&self) -> Generation {
        self.gate.current()
    }

    /// Returns the live [`Session`], if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the hover state of `level`.
    pub fn level_state(&self, level: usize) -> Option<&LevelState> {
        self.session.as_ref()?.hover.level(level)
    }

    fn teardown(&mut self, animate: bool) -> bool {
        let cancelled = self.choreographer.cancel_all();

        if self.session.is_none() {
            return false;
        }

        if animate {
            let layers = self.layers();
            self.exiting.extend(layers);
        }

        let Some(session) = self.session.take() else {
            return false;
        };

        self.measured.clear();

        log::debug!(
            "Closed session {} ({cancelled} pending timers cancelled)",
            session.generation
        );

        self.notify(Visibility::Closed(session.generation));

        true
    }

    fn retract_children(&mut self) {
        let before = self.layers();

        let Some(session) = &mut self.session else {
            return;
        };

        let _ = session.hover.clear();
        session.phase = Phase::ClosingRoot;

        self.retire(before);
    }

    fn retire(&mut self, before: Vec<MenuLayer>) {
        let after = self.layers();
        let is_live = |layer: &MenuLayer| after.iter().any(|live| live.tag == layer.tag);

        // A layer shown again stops exiting
        self.exiting.retain(|layer| !is_live(layer));
        self.exiting
            .extend(before.into_iter().filter(|layer| !is_live(layer)));
    }

    fn reposition_root(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };

        let size = self
            .measured
            .get(&LayerTag::root(session.generation))
            .copied()
            .unwrap_or_else(|| menu::estimate_size(&session.items, &self.settings.metrics));

        session.root_position = position::resolve_root_position(
            session.pointer,
            size,
            self.viewport,
            self.settings.placement.margin,
        );
    }

    fn notify(&mut self, visibility: Visibility) {
        if let Some(on_visibility) = &mut self.on_visibility {
            on_visibility(visibility);
        }
    }
}

impl fmt::Debug for ContextMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("settings", &self.settings)
            .field("viewport", &self.viewport)
            .field("generation", &self.gate.current())
            .field("session", &self.session)
            .field("choreographer", &self.choreographer)
            .field("exiting", &self.exiting.len())
            .finish_non_exhaustive()
    }
}
