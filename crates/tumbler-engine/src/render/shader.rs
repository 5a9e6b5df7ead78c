//! Embedded shader sources and their runtime compilation.
//!
//! Both stages are GLSL, entry point `main`, compiled through naga's front
//! end before the device ever sees them. Compiling up front gives us real
//! diagnostics with source spans; the validated IR is then handed to wgpu
//! as-is so the driver-facing module cannot diverge from what was checked.

use wgpu::naga;

use super::error::RenderError;

/// Vertex stage: applies the model matrix, forwards the face color.
///
/// The uniform block layout must match `ModelUniform` in `cube.rs`; std140
/// mat4 is column-major, so the CPU side transposes on upload.
pub(crate) const VERTEX_SOURCE: &str = r"#version 450

layout(location = 0) in vec3 position;
layout(location = 1) in vec3 color;

layout(location = 0) out vec3 v_color;

layout(std140, set = 0, binding = 0) uniform ModelTransform {
    mat4 model;
} ubo;

void main() {
    v_color = color;
    gl_Position = ubo.model * vec4(position, 1.0);
}
";

/// Fragment stage: interpolated face color, opaque.
pub(crate) const FRAGMENT_SOURCE: &str = r"#version 450

layout(location = 0) in vec3 v_color;
layout(location = 0) out vec4 out_color;

void main() {
    out_color = vec4(v_color, 1.0);
}
";

/// Compiles one stage's GLSL source to validated naga IR.
///
/// Every parser or validator diagnostic is a hard failure; the rendered
/// diagnostic goes to the log verbatim and is carried in the returned error.
pub(crate) fn compile(
    stage: naga::ShaderStage,
    source: &str,
) -> Result<naga::Module, RenderError> {
    let module = naga::front::glsl::Frontend::default()
        .parse(&naga::front::glsl::Options::from(stage), source)
        .map_err(|errors| compile_failure(stage, errors.emit_to_string(source)))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|error| compile_failure(stage, error.emit_to_string(source)))?;

    Ok(module)
}

fn compile_failure(stage: naga::ShaderStage, diagnostic: String) -> RenderError {
    log::error!("{stage:?} shader compilation failed:\n{diagnostic}");
    RenderError::ShaderCompile { stage, diagnostic }
}

/// Checks that the compiled vertex module exposes exactly the two inputs the
/// fixed vertex layout binds: vec3 position at location 0, vec3 color at
/// location 1.
///
/// This can only fail if compilation produced a module incompatible with the
/// CPU-side layout — a programming error in the embedded source, not a
/// runtime condition.
pub(crate) fn verify_vertex_inputs(module: &naga::Module) -> Result<(), RenderError> {
    let entry = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Vertex)
        .ok_or_else(|| RenderError::InputLayout("no vertex entry point".to_string()))?;

    let mut found = [false; 2];
    for arg in &entry.function.arguments {
        // Builtins (vertex index etc.) carry no location and are fine.
        let Some(naga::Binding::Location { location, .. }) = arg.binding else {
            continue;
        };
        if location > 1 {
            return Err(RenderError::InputLayout(format!(
                "unexpected vertex input at location {location}"
            )));
        }
        if !is_vec3_f32(module, arg.ty) {
            return Err(RenderError::InputLayout(format!(
                "vertex input at location {location} is not a vec3 of f32"
            )));
        }
        found[location as usize] = true;
    }

    if found != [true; 2] {
        return Err(RenderError::InputLayout(
            "vertex module is missing the position/color inputs".to_string(),
        ));
    }

    Ok(())
}

fn is_vec3_f32(module: &naga::Module, ty: naga::Handle<naga::Type>) -> bool {
    match module.types[ty].inner {
        naga::TypeInner::Vector {
            size: naga::VectorSize::Tri,
            scalar,
        } => scalar.kind == naga::ScalarKind::Float && scalar.width == 4,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_vertex_shader_compiles() {
        let module = compile(naga::ShaderStage::Vertex, VERTEX_SOURCE).unwrap();
        assert!(verify_vertex_inputs(&module).is_ok());
    }

    #[test]
    fn embedded_fragment_shader_compiles() {
        compile(naga::ShaderStage::Fragment, FRAGMENT_SOURCE).unwrap();
    }

    #[test]
    fn broken_source_fails_with_diagnostic() {
        let err = compile(naga::ShaderStage::Vertex, "void main() { nonsense!; }").unwrap_err();
        match err {
            RenderError::ShaderCompile { stage, diagnostic } => {
                assert_eq!(stage, naga::ShaderStage::Vertex);
                assert!(!diagnostic.is_empty());
            }
            other => panic!("expected ShaderCompile, got {other:?}"),
        }
    }

    #[test]
    fn fragment_module_is_not_a_valid_vertex_stage() {
        let module = compile(naga::ShaderStage::Fragment, FRAGMENT_SOURCE).unwrap();
        assert!(matches!(
            verify_vertex_inputs(&module),
            Err(RenderError::InputLayout(_))
        ));
    }

    #[test]
    fn wrong_input_type_is_rejected() {
        let source = r"#version 450
layout(location = 0) in vec2 position;
layout(location = 1) in vec3 color;
layout(location = 0) out vec3 v_color;
void main() {
    v_color = color;
    gl_Position = vec4(position, 0.0, 1.0);
}
";
        let module = compile(naga::ShaderStage::Vertex, source).unwrap();
        assert!(matches!(
            verify_vertex_inputs(&module),
            Err(RenderError::InputLayout(_))
        ));
    }

    #[test]
    fn extra_input_location_is_rejected() {
        let source = r"#version 450
layout(location = 0) in vec3 position;
layout(location = 1) in vec3 color;
layout(location = 2) in vec3 extra;
layout(location = 0) out vec3 v_color;
void main() {
    v_color = color + extra;
    gl_Position = vec4(position, 1.0);
}
";
        let module = compile(naga::ShaderStage::Vertex, source).unwrap();
        assert!(matches!(
            verify_vertex_inputs(&module),
            Err(RenderError::InputLayout(_))
        ));
    }
}
