/// Picks an 8-bit RGBA-class surface format from the supported set.
///
/// Unorm variants first so the fragment shader's colors land unmodified;
/// falls back to whatever the surface offers rather than failing bring-up on
/// exotic backends.
pub(crate) fn choose_surface_format(supported: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    if supported.is_empty() {
        return None;
    }

    let preferred = [
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureFormat::Bgra8UnormSrgb,
    ];
    for f in preferred {
        if supported.contains(&f) {
            return Some(f);
        }
    }

    Some(supported[0])
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
) -> wgpu::CompositeAlphaMode {
    supported
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_rgba8_over_surface_order() {
        let supported = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8Unorm,
        ];
        assert_eq!(
            choose_surface_format(&supported),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn falls_back_to_first_supported() {
        let supported = [wgpu::TextureFormat::Rgb10a2Unorm];
        assert_eq!(
            choose_surface_format(&supported),
            Some(wgpu::TextureFormat::Rgb10a2Unorm)
        );
    }

    #[test]
    fn empty_capabilities_yield_none() {
        assert_eq!(choose_surface_format(&[]), None);
    }

    #[test]
    fn alpha_mode_defaults_to_auto() {
        assert_eq!(choose_alpha_mode(&[]), wgpu::CompositeAlphaMode::Auto);
    }
}
