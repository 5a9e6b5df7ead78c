use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{FrameTargets, Gpu, GpuInit};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tumbler".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the platform loop to completion.
    ///
    /// Bring-up is a gated chain (window, GPU context, frame targets, app
    /// initialization); the first failure is logged with its phase, aborts
    /// the loop, and propagates out of this call so the process exit status
    /// reflects it.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut shell = Shell {
            config,
            gpu_init,
            app,
            view: None,
            fatal: None,
            exiting: false,
            warned_resize: false,
        };

        event_loop
            .run_app(&mut shell)
            .context("winit event loop terminated with error")?;

        match shell.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Live window + GPU state.
///
/// Field declaration order is reverse acquisition order (the clock holds no
/// GPU state): teardown drops the frame targets before the GPU context and
/// the GPU context before the window.
struct View {
    clock: FrameClock,
    targets: FrameTargets,
    gpu: Gpu,
    window: Arc<Window>,
}

struct Shell<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    view: Option<View>,
    fatal: Option<anyhow::Error>,
    exiting: bool,
    warned_resize: bool,
}

impl<A: App> Shell<A> {
    fn bring_up(&mut self, event_loop: &ActiveEventLoop) -> Result<View> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("window creation failed")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone()))
            .context("device/swapchain bring-up failed")?;

        let targets = FrameTargets::new(gpu.device(), gpu.config())
            .context("frame target creation failed")?;

        self.app
            .on_init(&gpu)
            .context("renderer initialization failed")?;

        Ok(View {
            clock: FrameClock::new(),
            targets,
            gpu,
            window,
        })
    }

    /// Synchronous teardown on the loop thread: app first, then GPU state in
    /// reverse acquisition order, then the window. A second call is a no-op.
    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            return;
        }
        self.exiting = true;

        self.app.on_close();
        self.view = None;

        event_loop.exit();
    }
}

impl<A: App> ApplicationHandler for Shell<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_some() || self.exiting {
            return;
        }

        match self.bring_up(event_loop) {
            Ok(view) => {
                view.window.request_redraw();
                self.view = Some(view);
            }
            Err(err) => {
                log::error!("initialization failed: {err:#}");
                self.fatal = Some(err);
                self.exiting = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            event_loop.exit();
            return;
        }

        // Cooperative poll loop: pending events drain without blocking, and
        // an idle pass renders exactly one frame.
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Some(view) = &self.view {
            view.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Split borrows: the frame context borrows `view` while the app
        // callback borrows `app`.
        let (app, view) = (&mut self.app, &mut self.view);
        let Some(view) = view.as_mut() else { return };
        if view.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested; tearing down");
                self.shut_down(event_loop);
            }

            WindowEvent::Resized(size) => {
                // Swapchain and depth buffer keep their creation dimensions.
                if !self.warned_resize {
                    log::debug!(
                        "ignoring resize to {}x{}; framebuffer stays {:?}",
                        size.width,
                        size.height,
                        view.gpu.size()
                    );
                    self.warned_resize = true;
                }
            }

            WindowEvent::RedrawRequested => {
                let time = view.clock.tick();
                if time.frame_index > 0 && time.frame_index % 600 == 0 {
                    log::debug!("{:.1} fps", view.clock.fps());
                }

                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        id: window_id,
                        window: &view.window,
                    },
                    gpu: &mut view.gpu,
                    targets: &view.targets,
                    time,
                };

                if app.on_frame(&mut ctx) == AppControl::Exit {
                    self.shut_down(event_loop);
                }
            }

            _ => {}
        }
    }
}
