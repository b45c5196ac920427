use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::caster::RayHit;
use crate::config::Config;
use crate::framebuffer::Framebuffer;
use crate::input::InputState;
use crate::map::GridMap;
use crate::player::Player;
use crate::projection::Projection;
use crate::scaler::Scaler;

mod caster;
mod config;
mod framebuffer;
mod input;
mod map;
mod math;
mod player;
mod projection;
mod renderer;
mod scaler;

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,

    config: Config,
    map: GridMap,
    player: Player,
    projection: Projection,

    // Internal framebuffer at the configured resolution, stretched to the
    // window on present.
    fb: Framebuffer,
    scaler: Scaler,

    // Per-column results, overwritten every frame.
    rays: Vec<RayHit>,

    keys_down: HashSet<KeyCode>,
    overlay: bool,
    last_tick: Instant,

    frame_counter: u32,
    last_report: Instant,
}

impl App {
    fn new(config: Config) -> Self {
        let projection = Projection::new(&config);
        let width = config.screen_width as usize;
        let height = config.screen_height as usize;

        Self {
            window: None,
            surface: None,
            map: GridMap::arena(),
            player: Player::new(1.5, 1.5, std::f32::consts::FRAC_PI_2),
            projection,
            fb: Framebuffer::new(width, height),
            scaler: Scaler::new(width, height, width, height),
            rays: vec![RayHit::none(); config.num_rays()],
            keys_down: HashSet::new(),
            overlay: false,
            last_tick: Instant::now(),
            frame_counter: 0,
            last_report: Instant::now(),
            config,
        }
    }

    fn tick(&mut self) {
        // Compute dt with a cap to avoid huge jumps if the app was paused
        let now = Instant::now();
        let mut dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        if dt > Duration::from_millis(100) {
            dt = Duration::from_millis(100);
        }
        let dt = dt.as_secs_f32();

        let input = InputState::from_keys(&self.keys_down);
        self.player.update(
            &input,
            &self.map,
            self.config.move_speed,
            self.config.rotation_speed,
            dt,
        );
    }

    fn rebuild_scaler(&mut self, dst_width: usize, dst_height: usize) {
        if dst_width == 0 || dst_height == 0 {
            return;
        }
        self.scaler = Scaler::new(dst_width, dst_height, self.fb.width(), self.fb.height());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("gridcaster")
            .with_inner_size(LogicalSize::new(
                self.config.screen_width as f64,
                self.config.screen_height as f64,
            ));

        let window = Rc::new(event_loop.create_window(attributes).expect("create window"));

        let context = softbuffer::Context::new(window.clone()).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, window.clone()).expect("softbuffer surface");

        let size = window.inner_size();
        self.rebuild_scaler(size.width as usize, size.height as usize);

        self.surface = Some(surface);
        self.window = Some(window);

        self.last_tick = Instant::now();
        self.window.as_ref().unwrap().request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => match code {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::Tab if !repeat => self.overlay = !self.overlay,
                            _ => {
                                self.keys_down.insert(code);
                            }
                        },
                        ElementState::Released => {
                            self.keys_down.remove(&code);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();

                let (window, surface) = match (&self.window, &mut self.surface) {
                    (Some(w), Some(s)) if w.id() == id => (w, s),
                    _ => return,
                };

                let size = window.inner_size();
                let (dw, dh) = (size.width as usize, size.height as usize);
                if dw == 0 || dh == 0 {
                    return; // Minimized window, skip drawing
                }

                surface
                    .resize(
                        NonZeroU32::new(dw as u32).unwrap(),
                        NonZeroU32::new(dh as u32).unwrap(),
                    )
                    .expect("resize surface");

                renderer::render_frame(
                    &mut self.fb,
                    &self.map,
                    &self.player,
                    &self.projection,
                    &mut self.rays,
                    self.config.max_ray_depth,
                    self.overlay,
                );

                let mut buf = surface.buffer_mut().expect("buffer_mut");
                self.scaler.blit(&mut buf, dw, self.fb.data(), self.fb.width());
                buf.present().expect("present");

                self.frame_counter += 1;
                let now = Instant::now();
                let elapsed = now.duration_since(self.last_report).as_secs_f32();
                if elapsed >= 1.0 {
                    log::debug!(
                        "fps: {:.1} pos: ({:.2}, {:.2})",
                        self.frame_counter as f32 / elapsed,
                        self.player.x,
                        self.player.y
                    );
                    self.frame_counter = 0;
                    self.last_report = now;
                }

                self.window.as_ref().unwrap().request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                self.rebuild_scaler(new_size.width as usize, new_size.height as usize);
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    log::info!(
        "{}x{} internal, {} rays at {} px, hfov {} deg",
        config.screen_width,
        config.screen_height,
        config.num_rays(),
        config.ray_resolution,
        config.hfov_degrees
    );

    let event_loop = EventLoop::new().context("create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("run event loop")?;

    Ok(())
}
