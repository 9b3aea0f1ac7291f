//! # platform
//!
//! Native window host: a winit event loop feeding egui through egui-winit
//! and drawing its output with egui-wgpu. Applications plug in through
//! [`HostApp`].

mod error;
mod gpu;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use egui::Context;
use egui::viewport::ViewportId;
use egui_winit::State as EguiWinitState;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

pub use error::PlatformError;

use gpu::Gpu;

/// Redraw cadence of the ticker thread.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Application hosted in the window.
pub trait HostApp {
    /// Called once, as soon as the egui context exists.
    fn setup(&mut self, _ctx: &Context) {}

    /// Build this frame's UI.
    fn ui(&mut self, ctx: &Context);
}

enum UserEvent {
    Tick,
}

/// Open a window titled `title` and run `app` until the window closes.
pub fn run<A: HostApp>(title: &str, app: A) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut host = Host {
        title: title.to_string(),
        app,
        window: None,
        proxy: Some(proxy),
        ticker_started: false,
        egui_state: None,
        gpu: None,
        failure: None,
    };
    event_loop.run_app(&mut host)?;

    match host.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Host<A> {
    title: String,
    app: A,
    window: Option<Arc<Window>>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    egui_state: Option<EguiWinitState>,
    gpu: Option<Gpu>,
    /// First setup error; ends the event loop.
    failure: Option<PlatformError>,
}

impl<A: HostApp> Host<A> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let window = match &self.window {
            Some(window) => Arc::clone(window),
            None => {
                let attributes = Window::default_attributes().with_title(self.title.as_str());
                let window = Arc::new(event_loop.create_window(attributes)?);
                self.window = Some(Arc::clone(&window));
                window
            }
        };

        self.start_ticker();

        if self.egui_state.is_none() {
            let ctx = Context::default();
            let state = EguiWinitState::new(
                ctx.clone(),
                ViewportId::ROOT,
                window.as_ref(),
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            self.app.setup(&ctx);
            self.egui_state = Some(state);
        }

        if self.gpu.is_none() {
            self.gpu = Some(Gpu::new(&window)?);
        }
        Ok(())
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.clone() {
            thread::spawn(move || {
                while proxy.send_event(UserEvent::Tick).is_ok() {
                    thread::sleep(FRAME_INTERVAL);
                }
            });
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(state), Some(gpu)) =
            (self.window.as_ref(), self.egui_state.as_mut(), self.gpu.as_mut())
        else {
            return;
        };

        let ctx = state.egui_ctx().clone();
        let raw_input = state.take_egui_input(window);
        let app = &mut self.app;
        let mut output = ctx.run(raw_input, |ctx| app.ui(ctx));

        let platform_output = std::mem::take(&mut output.platform_output);
        state.handle_platform_output(window, platform_output);
        gpu.render(&ctx, output);
    }
}

impl<A: HostApp> ApplicationHandler<UserEvent> for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.init(event_loop) {
            log::error!(target: "platform", "startup failed: {err}");
            self.failure = Some(err);
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(state)) = (self.window.as_ref(), self.egui_state.as_mut()) {
            let _response = state.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}
