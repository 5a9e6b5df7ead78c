use anyhow::Result;

use tumbler_engine::core::{App, AppControl, FrameCtx};
use tumbler_engine::device::{Gpu, GpuInit};
use tumbler_engine::logging::{LoggingConfig, init_logging};
use tumbler_engine::render::{CubeRenderer, Spin};
use tumbler_engine::window::{Runtime, RuntimeConfig};

/// The demo application: one spinning cube.
struct CubeApp {
    renderer: CubeRenderer,
    spin: Spin,
}

impl CubeApp {
    fn new() -> Self {
        Self {
            renderer: CubeRenderer::new(),
            spin: Spin::new(),
        }
    }
}

impl App for CubeApp {
    fn on_init(&mut self, gpu: &Gpu) -> Result<()> {
        self.renderer
            .compile_shaders(gpu.device(), gpu.surface_format())?;
        self.renderer.generate_buffers(gpu.device())?;
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // Exactly one update per rendered frame; the animation rate is tied
        // to the presentation rate.
        self.spin.update();

        let model = *self.spin.model();
        let renderer = &self.renderer;
        ctx.render(|rctx, target| renderer.draw(rctx, target, &model))
    }

    fn on_close(&mut self) {
        self.renderer.release();
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("tumbler starting");

    Runtime::run(
        RuntimeConfig {
            title: "Tumbler".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        CubeApp::new(),
    )
}
