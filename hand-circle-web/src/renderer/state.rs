//! GPU State management - WebGPU device, queue, surface initialization

use std::cell::RefCell;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use super::shapes::Vertex;

/// Canvas the stroke is drawn on
const CANVAS_ID: &str = "draw-canvas";

/// Initial vertex buffer capacity (vertices); grown on demand
pub(crate) const INITIAL_VERTEX_CAPACITY: u64 = 16 * 1024;

/// Errors that can occur during GPU initialization
#[derive(Debug, Error)]
pub enum GpuStateError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No canvas with id 'draw-canvas' found")]
    NoCanvas,
    #[error("Surface creation failed: {0}")]
    SurfaceCreationFailed(String),
    #[error("Failed to find a suitable GPU adapter")]
    NoAdapter,
    #[error("Device creation failed: {0}")]
    DeviceCreationFailed(String),
}

impl From<GpuStateError> for JsValue {
    fn from(err: GpuStateError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Holds all WebGPU state for rendering
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub render_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    /// Vertices that fit in `vertex_buffer`
    pub vertex_capacity: u64,
}

impl GpuState {
    /// Make room for `count` vertices, reallocating the buffer if needed
    pub fn ensure_vertex_capacity(&mut self, count: u64) {
        if count <= self.vertex_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        self.vertex_buffer = create_vertex_buffer(&self.device, capacity);
        self.vertex_capacity = capacity;
    }
}

// Thread-local storage for GPU state (WASM is single-threaded)
thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Stroke Vertex Buffer"),
        size: capacity * std::mem::size_of::<Vertex>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Initialize WebGPU: adapter, device, surface, pipeline
pub async fn initialize_gpu(width: u32, height: u32) -> Result<(), GpuStateError> {
    let window = web_sys::window().ok_or(GpuStateError::NoWindow)?;
    let document = window.document().ok_or(GpuStateError::NoDocument)?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)?;

    let (width, height) = (width.max(1), height.max(1));
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(format!("{:?}", e)))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Hand Circle Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(format!("{:?}", e)))?;

    // Configure surface
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    // Create shader and pipeline
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Stroke Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Stroke Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

    GPU_STATE.with(|state| {
        *state.borrow_mut() = Some(GpuState {
            device,
            queue,
            surface,
            config,
            render_pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
        });
    });

    Ok(())
}

/// Reconfigure the surface for a new canvas size. No-op before init.
pub fn resize_surface(width: u32, height: u32) {
    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let Some(state) = state_ref.as_mut() else {
            return;
        };
        state.config.width = width.max(1);
        state.config.height = height.max(1);
        state.surface.configure(&state.device, &state.config);
    });
}
