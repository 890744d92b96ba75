use iced::alignment::Vertical;
use iced::event::{self, Event};
use iced::widget::{column, container, row, space::horizontal as horizontal_space, stack, text};
use iced::{Color, Element, Length, Point, Size, Subscription, Task, Theme, border, mouse, touch, window};
use softlight_core::{HostDisplay, LightController, NoopDisplay, Rgb};
use std::time::{Duration, Instant};

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(SoftLight::default, SoftLight::update, SoftLight::view)
        .title("SoftLight")
        .subscription(SoftLight::subscription)
        .theme(SoftLight::theme)
        .run()
}

/// Pointer travel below this counts as a tap, not a drag.
const TAP_SLOP: f32 = 6.0;

struct SoftLight {
    controller: LightController<Box<dyn HostDisplay>>,
    view_size: Size,
    cursor: Point,
    press_origin: Option<Point>,
    dragging: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Event(Event),
    Tick(Instant),
}

fn open_host() -> Box<dyn HostDisplay> {
    #[cfg(target_os = "linux")]
    {
        match softlight_core::SysfsBacklight::discover() {
            Ok(backlight) => return Box::new(backlight),
            Err(e) => log::info!("no controllable backlight ({e}); rendering only"),
        }
    }
    Box::new(NoopDisplay)
}

impl Default for SoftLight {
    fn default() -> Self {
        let mut controller = LightController::new(open_host());
        controller.activate(Instant::now());

        Self {
            controller,
            // Zero until the window reports its size; the controller skips
            // axes with unknown dimensions.
            view_size: Size::ZERO,
            cursor: Point::ORIGIN,
            press_origin: None,
            dragging: false,
        }
    }
}

impl SoftLight {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Event(Event::Mouse(event)) => self.on_mouse(event),
            Message::Event(Event::Touch(event)) => self.on_touch(event),
            Message::Event(Event::Window(window::Event::Resized(size))) => {
                self.view_size = size;
            }
            Message::Event(Event::Window(window::Event::CloseRequested)) => {
                self.controller.deactivate();
            }
            Message::Event(_) => {}
            Message::Tick(now) => {
                self.controller.tick(now);
            }
        }

        Task::none()
    }

    fn on_mouse(&mut self, event: mouse::Event) {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => self.pointer_down(self.cursor),
            mouse::Event::CursorMoved { position } => {
                self.cursor = position;
                self.pointer_moved(position);
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.pointer_up(),
            _ => {}
        }
    }

    fn on_touch(&mut self, event: touch::Event) {
        match event {
            touch::Event::FingerPressed { position, .. } => {
                self.cursor = position;
                self.pointer_down(position);
            }
            touch::Event::FingerMoved { position, .. } => {
                self.cursor = position;
                self.pointer_moved(position);
            }
            touch::Event::FingerLifted { .. } => self.pointer_up(),
            touch::Event::FingerLost { .. } => {
                self.press_origin = None;
                if self.dragging {
                    self.dragging = false;
                    self.controller.end_gesture();
                }
            }
        }
    }

    fn pointer_down(&mut self, position: Point) {
        self.press_origin = Some(position);
        self.dragging = false;
    }

    fn pointer_moved(&mut self, position: Point) {
        let Some(origin) = self.press_origin else {
            return;
        };

        let dx = position.x - origin.x;
        let dy = position.y - origin.y;

        if !self.dragging && (dx.abs() > TAP_SLOP || dy.abs() > TAP_SLOP) {
            self.dragging = true;
            self.controller.begin_gesture();
        }

        if self.dragging {
            self.controller.update_gesture(
                f64::from(dx),
                f64::from(dy),
                f64::from(self.view_size.width),
                f64::from(self.view_size.height),
            );
        }
    }

    fn pointer_up(&mut self) {
        if self.press_origin.take().is_none() {
            return;
        }

        if self.dragging {
            self.dragging = false;
            self.controller.end_gesture();
        } else {
            // A press without travel is a tap.
            self.controller.toggle_overlay();
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let state = self.controller.state();
        let fill = to_color(state.color().scaled(state.brightness));

        let light = container(horizontal_space())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(fill.into()),
                ..container::Style::default()
            });

        let dim = Color::from_rgba(0.45, 0.45, 0.45, 0.6);
        let status = container(
            row![
                text(format!("mode: {}", state.mode())).size(13).color(dim),
                horizontal_space(),
                text(format!("brightness: {}%", state.brightness_percent()))
                    .size(13)
                    .color(dim),
            ],
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(16);

        let mut layers = stack![light, status];
        if self.controller.overlay().is_visible() {
            layers = layers.push(self.overlay_panel());
        }

        layers.into()
    }

    fn overlay_panel(&self) -> Element<'_, Message> {
        let instructions = column![
            text("drag up / down to adjust brightness").size(14),
            text("drag left / right to adjust color tone").size(14),
            text("tap anywhere to show or hide this help").size(14),
        ]
        .spacing(6);

        let panel = container(column![text("how to use").size(16), instructions].spacing(10))
            .padding(16)
            .max_width(360)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
                text_color: Some(Color::from_rgba(0.85, 0.85, 0.85, 1.0)),
                border: border::rounded(12),
                ..container::Style::default()
            });

        container(panel)
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen().map(Message::Event);

        // Poll the auto-hide deadline only while one is armed.
        if self.controller.overlay().auto_hide_pending() {
            let ticks =
                iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick(Instant::now()));
            Subscription::batch([events, ticks])
        } else {
            events
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.red as f32, rgb.green as f32, rgb.blue as f32)
}
