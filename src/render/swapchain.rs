/// Pick the swap-chain format.
///
/// Colors are authored as sRGB bytes and written straight through, so a
/// plain `*Unorm` target is preferred; an `*Srgb` view would encode them a
/// second time. Falls back to the first advertised format.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
            )
        })
        .or_else(|| formats.iter().copied().find(|f| !f.is_srgb()))
        .or_else(|| formats.first().copied())
}
