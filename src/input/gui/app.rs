//! Window event loop for the interactive viewer.

use log::{debug, error, info};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::Window,
};

use crate::controllers::viewer::controller::ViewerController;
use crate::controllers::viewer::selection_drag::SelectionDrag;
use crate::core::data::point::Point;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: ViewerController<PngFilePresenter>,
    drag: SelectionDrag,
    /// Last cursor position in full-resolution image pixels.
    cursor: Point,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        controller: ViewerController<PngFilePresenter>,
    ) -> Self {
        Self {
            window,
            presenter,
            controller,
            drag: SelectionDrag::default(),
            cursor: Point { x: 0, y: 0 },
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), winit::error::EventLoopError> {
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            _ => {}
        })
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                let selection = self.drag.current(self.controller.pixel_rect());

                if let Err(err) = self.presenter.present(self.controller.buffer(), selection) {
                    error!("render error: {}", err);
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                    error!("failed to resize surface: {}", err);
                    elwt.exit();
                }
                self.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.presenter.image_point(position);

                if self.drag.is_dragging() {
                    self.drag.update(self.cursor);
                    self.window.request_redraw();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => self.drag.begin(self.cursor),
                    ElementState::Released => {
                        if let Some(selection) = self.drag.finish(self.controller.pixel_rect()) {
                            if let Err(err) = self.controller.zoom(&selection) {
                                debug!("zoom ignored: {}", err);
                            }
                        }
                    }
                }
                self.window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(&logical_key),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key.as_ref() {
            Key::Named(NamedKey::Escape) => self.drag.cancel(),
            Key::Character("r") => {
                if let Err(err) = self.controller.reset() {
                    error!("reset failed: {}", err);
                }
            }
            Key::Character("p") => match self.controller.snapshot() {
                Ok(path) => info!("snapshot written to {}", path.display()),
                Err(err) => error!("{}", err),
            },
            _ => return,
        }

        self.window.request_redraw();
    }
}
