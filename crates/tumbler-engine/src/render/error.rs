use thiserror::Error;

/// Failures of shader compilation, pipeline assembly, and geometry upload.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The shader compiler rejected a stage's source. `diagnostic` is the
    /// compiler's rendered output, verbatim. Any diagnostic is fatal; there
    /// is no warnings-pass-through.
    #[error("{stage:?} shader failed to compile:\n{diagnostic}")]
    ShaderCompile {
        stage: wgpu::naga::ShaderStage,
        diagnostic: String,
    },

    /// The compiled vertex module does not expose the inputs the fixed
    /// vertex layout binds to.
    #[error("vertex input layout rejected: {0}")]
    InputLayout(String),

    #[error("constant buffer allocation failed: {0}")]
    ConstantBuffer(wgpu::Error),

    #[error("vertex buffer creation failed: {0}")]
    BufferCreation(wgpu::Error),

    #[error("render pipeline creation failed: {0}")]
    Pipeline(wgpu::Error),
}
