use super::helpers;
use crate::constants::MAX_SPHERES;
use geometry_core::SphereDraw;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DiscInstance {
    pub(crate) center_radius: [f32; 4],
    pub(crate) color: [f32; 4],
}

impl From<&SphereDraw> for DiscInstance {
    fn from(s: &SphereDraw) -> Self {
        Self {
            center_radius: s.center.extend(s.radius).to_array(),
            color: s.color.to_array(),
        }
    }
}

pub(crate) struct DiscResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instances: wgpu::Buffer,
}

pub(crate) fn create_disc_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
) -> DiscResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("discs_shader"),
        source: wgpu::ShaderSource::Wgsl(super::DISCS_WGSL.into()),
    });
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
    let pipeline = helpers::make_instanced_pipeline(
        device,
        "discs_pipeline",
        layout,
        &shader,
        ("vs_disc", "fs_disc"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<DiscInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        },
        format,
    );
    let instances = helpers::instance_buffer(
        device,
        "disc_instances",
        (std::mem::size_of::<DiscInstance>() * MAX_SPHERES) as u64,
    );
    DiscResources {
        pipeline,
        instances,
    }
}
