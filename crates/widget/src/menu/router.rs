//! Route user interface events to a [`ContextMenu`].
//!
//! An [`EventRouter`] is an explicit listener with an
//! [`attach`](EventRouter::attach) / [`detach`](EventRouter::detach)
//! lifecycle. Several routers, each driving its own menu, never collide.
use super::context_menu::{ContextMenu, Hit};
use super::layer::LayerTag;
use crate::core::event::{Event, Status};
use crate::core::keyboard::{self, Named};
use crate::core::menu::MenuItem;
use crate::core::time::Instant;
use crate::core::{Point, mouse, window};

use smol_str::SmolStr;

use std::fmt;

/// Routes events to a [`ContextMenu`].
pub struct EventRouter {
    attached: bool,
    provider: Box<dyn FnMut(Point) -> Vec<MenuItem>>,
    cursor: Option<Point>,
    pressed: Option<(LayerTag, SmolStr)>,
}

impl EventRouter {
    /// Creates a detached [`EventRouter`].
    ///
    /// `provider` supplies the items of the menu every time an open trigger
    /// happens at a point. Returning no items shows no menu.
    pub fn new(provider: impl FnMut(Point) -> Vec<MenuItem> + 'static) -> Self {
        Self {
            attached: false,
            provider: Box::new(provider),
            cursor: None,
            pressed: None,
        }
    }

    /// Starts listening to events.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops listening to events and closes `menu` at once.
    pub fn detach(&mut self, menu: &mut ContextMenu) {
        self.attached = false;
        self.cursor = None;
        self.pressed = None;

        let _ = menu.close_immediate();
    }

    /// Returns true if the router is listening to events.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Processes an [`Event`] at `now`.
    ///
    /// Returns [`Status::Captured`] if the menu consumed the event.
    pub fn route(&mut self, menu: &mut ContextMenu, event: &Event, now: Instant) -> Status {
        if !self.attached {
            return Status::Ignored;
        }

        if let Some(position) = event.position() {
            self.cursor = Some(position);
        }

        match event {
            Event::Mouse(event) => self.route_mouse(menu, event, now),
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if key.is_named(Named::Escape) && menu.is_open() {
                    let policy = menu.settings().dismiss.escape;
                    let _ = menu.close(policy, now);

                    Status::Captured
                } else if key.is_named(Named::ContextMenu) {
                    match self.cursor {
                        Some(cursor) => self.open(menu, cursor),
                        None => Status::Ignored,
                    }
                } else {
                    Status::Ignored
                }
            }
            Event::Keyboard(keyboard::Event::KeyReleased { .. }) => Status::Ignored,
            Event::Window(event) => self.route_window(menu, event, now),
        }
    }

    fn route_mouse(&mut self, menu: &mut ContextMenu, event: &mouse::Event, now: Instant) -> Status {
        match *event {
            mouse::Event::CursorMoved { position } => match menu.hit_test(position) {
                Hit::Outside => Status::Ignored,
                Hit::Layer(_) => Status::Captured,
                Hit::Item(tag, item) => {
                    let _ = menu.hover(tag.level, &item.key, item.bounds);

                    Status::Captured
                }
            },
            mouse::Event::ButtonPressed {
                button: mouse::Button::Right,
                position,
            } => {
                if menu.contains(position) {
                    Status::Captured
                } else {
                    self.open(menu, position)
                }
            }
            mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
                position,
            } => {
                if !menu.is_open() {
                    return Status::Ignored;
                }

                match menu.hit_test(position) {
                    Hit::Outside => {
                        self.pressed = None;

                        let policy = menu.settings().dismiss.outside_click;
                        let _ = menu.close(policy, now);
                    }
                    Hit::Layer(_) => {
                        self.pressed = None;
                    }
                    Hit::Item(tag, item) => {
                        self.pressed = Some((tag, item.key));
                    }
                }

                Status::Captured
            }
            mouse::Event::ButtonReleased {
                button: mouse::Button::Left,
                position,
            } => {
                let Some((pressed_tag, pressed_key)) = self.pressed.take() else {
                    return Status::captured_if(menu.contains(position));
                };

                match menu.hit_test(position) {
                    Hit::Item(tag, item) if tag == pressed_tag && item.key == pressed_key => {
                        let _ = menu.select(tag.level, &item.key);

                        Status::Captured
                    }
                    Hit::Outside => Status::Ignored,
                    Hit::Layer(_) | Hit::Item(..) => Status::Captured,
                }
            }
            mouse::Event::WheelScrolled { .. } if menu.is_open() => {
                let policy = menu.settings().dismiss.scroll;
                let _ = menu.close(policy, now);

                Status::Ignored
            }
            _ => Status::Ignored,
        }
    }

    fn route_window(&mut self, menu: &mut ContextMenu, event: &window::Event, now: Instant) -> Status {
        match *event {
            window::Event::Resized(size) => {
                menu.set_viewport(size);

                Status::Ignored
            }
            window::Event::Scrolled => {
                let policy = menu.settings().dismiss.scroll;
                let _ = menu.close(policy, now);

                Status::Ignored
            }
            window::Event::Unfocused => {
                self.pressed = None;

                let policy = menu.settings().dismiss.blur;
                let _ = menu.close(policy, now);

                Status::Ignored
            }
            window::Event::CloseRequested => {
                self.detach(menu);

                Status::Ignored
            }
            window::Event::Focused => Status::Ignored,
        }
    }

    fn open(&mut self, menu: &mut ContextMenu, position: Point) -> Status {
        self.pressed = None;

        let items = (self.provider)(position);

        match menu.open(position, items) {
            Some(_) => Status::Captured,
            None => Status::Ignored,
        }
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("attached", &self.attached)
            .field("cursor", &self.cursor)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}
