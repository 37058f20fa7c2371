use super::helpers;
use crate::constants::MAX_SEGMENTS;
use glam::{Vec3, Vec4};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SegmentInstance {
    pub(crate) a: [f32; 4],
    pub(crate) b: [f32; 4],
    pub(crate) color: [f32; 4],
}

impl SegmentInstance {
    pub(crate) fn new(a: Vec3, b: Vec3, color: Vec4) -> Self {
        Self {
            a: a.extend(1.0).to_array(),
            b: b.extend(1.0).to_array(),
            color: color.to_array(),
        }
    }
}

pub(crate) struct SegmentResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instances: wgpu::Buffer,
}

pub(crate) fn create_segment_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
) -> SegmentResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(super::LINES_WGSL.into()),
    });
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4];
    let pipeline = helpers::make_instanced_pipeline(
        device,
        "lines_pipeline",
        layout,
        &shader,
        ("vs_segment", "fs_segment"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SegmentInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        },
        format,
    );
    let instances = helpers::instance_buffer(
        device,
        "segment_instances",
        (std::mem::size_of::<SegmentInstance>() * MAX_SEGMENTS) as u64,
    );
    SegmentResources {
        pipeline,
        instances,
    }
}
