//! Native window and event loop
//!
//! One thread owns the window, the GPU context and the game state. Key events
//! are delivered on that thread between frames, so nothing here is shared.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::game_loop::{FrameClock, run_frame};
use crate::input::{Control, GameKey, handle_key};
use crate::renderer::{RenderError, RenderState, ShaderSources};
use crate::sim::GameState;

/// Open the window and play until it is closed
pub fn run() -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize the windowing system")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let mut app = App::new(GameState::new(seed));
    event_loop
        .run_app(&mut app)
        .context("event loop exited abnormally")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Game instance holding all state
struct App {
    state: GameState,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    clock: FrameClock,
    /// First fatal error; stops the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(state: GameState) -> Self {
        Self {
            state,
            window: None,
            render_state: None,
            clock: FrameClock::new(Instant::now()),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let court = self.state.tuning.court_size();
        let render_state = pollster::block_on(create_renderer(window.clone(), court))
            .context("failed to initialize renderer")?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = FrameClock::new(Instant::now());
        Ok(())
    }

    /// Title refresh, render, update
    fn frame(&mut self) -> Result<()> {
        let (Some(window), Some(render_state)) = (&self.window, &mut self.render_state) else {
            return Ok(());
        };

        if let Some(title) = self.state.take_title_refresh() {
            window.set_title(&title);
        }

        let elapsed = self.clock.advance(Instant::now());
        run_frame(&mut self.state, render_state, elapsed)?;
        Ok(())
    }

    fn handle_key_event(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        // Auto-repeat carries no new transition
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = GameKey::from_key_code(code) else {
            return;
        };
        if handle_key(&mut self.state, key, event.state.into()) == Control::Close {
            event_loop.exit();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{:#}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                log::debug!("Window resized to {}x{}", size.width, size.height);
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key_event(event_loop, event);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Surface, adapter, device and pipeline for `window`, mapping `court` onto it
async fn create_renderer(window: Arc<Window>, court: Vec2) -> Result<RenderState, RenderError> {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(
        surface,
        &adapter,
        size.width.max(1),
        size.height.max(1),
        court,
        ShaderSources::default(),
    )
    .await
}
