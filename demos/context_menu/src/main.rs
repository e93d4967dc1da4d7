use icy_menu::event::Event;
use icy_menu::menu::MenuLayer;
use icy_menu::time::{Duration, Instant, milliseconds};
use icy_menu::{
    ContextMenu, EventRouter, MenuItem, Point, Settings, Size, keyboard, mouse, window,
};

use std::cell::RefCell;
use std::rc::Rc;

pub fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|error| {
            log::warn!("Falling back to default settings: {error}");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let counter = Rc::new(RefCell::new(App::default()));

    let mut menu = ContextMenu::new(settings, Size::new(800.0, 600.0))
        .on_visibility(|visibility| log::info!("{visibility:?}"));

    let mut router = EventRouter::new({
        let counter = Rc::clone(&counter);
        move |_| items(&counter)
    });
    router.attach();

    let start = Instant::now();
    let mut clock = Clock { start, now: start };

    // Walk into the nested menu, then use the root menu
    clock.send(&mut router, &mut menu, right_click(Point::new(700.0, 120.0)));
    clock.hover_item(&mut router, &mut menu, 0, "transform");
    clock.hover_item(&mut router, &mut menu, 1, "scale");
    clock.click_item(&mut router, &mut menu, 2, "double");

    clock.send(&mut router, &mut menu, right_click(Point::new(40.0, 560.0)));
    clock.click_item(&mut router, &mut menu, 0, "increment");

    // Dismiss with an outside click and let the close sequence play
    clock.send(&mut router, &mut menu, right_click(Point::new(300.0, 200.0)));
    clock.hover_item(&mut router, &mut menu, 0, "transform");
    clock.send(&mut router, &mut menu, left_press(Point::new(20.0, 20.0)));
    clock.advance(&mut menu, milliseconds(200));

    // Escape closes at once
    clock.send(&mut router, &mut menu, right_click(Point::new(300.0, 200.0)));
    clock.send(
        &mut router,
        &mut menu,
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::Named::Escape),
            repeat: false,
        }
        .into(),
    );

    for layer in menu.exiting_layers().to_vec() {
        let _ = menu.exit_finished(&layer.tag);
    }

    clock.send(
        &mut router,
        &mut menu,
        window::Event::CloseRequested.into(),
    );

    let app = counter.borrow();

    log::info!("Last action: {}", app.last_action);
    println!("Counter: {}", app.counter);
}

#[derive(Debug, Default)]
struct App {
    counter: i32,
    last_action: String,
}

impl App {
    fn apply(&mut self, action: &str) {
        match action {
            "increment" => self.counter += 1,
            "decrement" => self.counter -= 1,
            "reset" => self.counter = 0,
            "double" => self.counter *= 2,
            "halve" => self.counter /= 2,
            _ => {}
        }

        self.last_action = action.to_owned();
    }
}

fn items(app: &Rc<RefCell<App>>) -> Vec<MenuItem> {
    let action = |key: &'static str, label: &'static str| {
        let app = Rc::clone(app);

        MenuItem::new(key, label).on_click(move || app.borrow_mut().apply(key))
    };

    vec![
        action("increment", "Increment").shortcut("+"),
        action("decrement", "Decrement").shortcut("-"),
        MenuItem::submenu(
            "transform",
            "Transform",
            [
                MenuItem::submenu(
                    "scale",
                    "Scale",
                    [action("double", "Double"), action("halve", "Halve")],
                ),
                action("reset", "Reset").with_divider(),
            ],
        )
        .with_divider(),
        MenuItem::new("about", "About").disabled(true),
    ]
}

fn right_click(position: Point) -> Event {
    mouse::Event::ButtonPressed {
        button: mouse::Button::Right,
        position,
    }
    .into()
}

fn left_press(position: Point) -> Event {
    mouse::Event::ButtonPressed {
        button: mouse::Button::Left,
        position,
    }
    .into()
}

struct Clock {
    start: Instant,
    now: Instant,
}

impl Clock {
    fn send(&mut self, router: &mut EventRouter, menu: &mut ContextMenu, event: Event) {
        self.advance(menu, milliseconds(16));

        let status = router.route(menu, &event, self.now);

        if status.is_captured() {
            log::debug!("Menu captured {event:?}");
        }

        print_layers(self.elapsed(), &menu.layers());
    }

    fn advance(&mut self, menu: &mut ContextMenu, duration: Duration) {
        let target = self.now + duration;

        while let Some(deadline) = menu.next_deadline().filter(|deadline| *deadline <= target) {
            self.now = self.now.max(deadline);

            if menu.tick(self.now) {
                print_layers(self.elapsed(), &menu.layers());
            }
        }

        self.now = target;
    }

    fn hover_item(
        &mut self,
        router: &mut EventRouter,
        menu: &mut ContextMenu,
        level: usize,
        key: &str,
    ) {
        if let Some(position) = item_center(menu, level, key) {
            self.send(
                router,
                menu,
                Event::Mouse(mouse::Event::CursorMoved { position }),
            );
        }
    }

    fn click_item(
        &mut self,
        router: &mut EventRouter,
        menu: &mut ContextMenu,
        level: usize,
        key: &str,
    ) {
        let Some(position) = item_center(menu, level, key) else {
            return;
        };

        self.send(router, menu, left_press(position));
        self.send(
            router,
            menu,
            Event::Mouse(mouse::Event::ButtonReleased {
                button: mouse::Button::Left,
                position,
            }),
        );
    }

    fn elapsed(&self) -> Duration {
        self.now.duration_since(self.start)
    }
}

fn item_center(menu: &ContextMenu, level: usize, key: &str) -> Option<Point> {
    let layers = menu.layers();
    let item = layers.get(level)?.items.iter().find(|item| item.key == key)?;

    Some(Point::new(
        item.bounds.x + item.bounds.width / 2.0,
        item.bounds.y + item.bounds.height / 2.0,
    ))
}

fn print_layers(elapsed: Duration, layers: &[MenuLayer]) {
    println!("[{:>5} ms] {} layer(s)", elapsed.as_millis(), layers.len());

    for layer in layers {
        let labels: Vec<_> = layer
            .items
            .iter()
            .map(|item| {
                if item.hovered {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();

        println!(
            "  level {} {:?} at ({:.0}, {:.0}): {}",
            layer.tag.level,
            layer.direction,
            layer.bounds.x,
            layer.bounds.y,
            labels.join(" | ")
        );
    }
}
