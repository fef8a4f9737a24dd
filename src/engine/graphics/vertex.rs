use crate::game::scene::DrawInstance;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
            2 => Float32x2
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// Per-box data uploaded for instanced drawing.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxInstance {
    pub offset: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
    /// x: 1.0 when textured, yz: uv repeat.
    pub texture: [f32; 3],
}

impl BoxInstance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            3 => Float32x3,
            4 => Float32x3,
            5 => Float32x3,
            6 => Float32x3
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

impl From<&DrawInstance> for BoxInstance {
    fn from(instance: &DrawInstance) -> Self {
        let texture = match instance.texture_repeat {
            Some([u, v]) => [1.0, u, v],
            None => [0.0, 1.0, 1.0],
        };
        Self {
            offset: instance.position.to_array(),
            scale: instance.scale.to_array(),
            color: instance.color,
            texture,
        }
    }
}

macro_rules! face {
    ($n:expr, $a:expr, $b:expr, $c:expr, $d:expr) => {
        [
            Vertex { position: $a, normal: $n, tex_coords: [0.0, 1.0] },
            Vertex { position: $b, normal: $n, tex_coords: [1.0, 1.0] },
            Vertex { position: $c, normal: $n, tex_coords: [1.0, 0.0] },
            Vertex { position: $d, normal: $n, tex_coords: [0.0, 0.0] },
        ]
    };
}

/// Unit cube centred on the origin, four vertices per face so normals stay flat.
pub const CUBE_FACES: [[Vertex; 4]; 6] = [
    // Front (+z)
    face!([0.0, 0.0, 1.0], [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]),
    // Back (-z)
    face!([0.0, 0.0, -1.0], [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]),
    // Left (-x)
    face!([-1.0, 0.0, 0.0], [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]),
    // Right (+x)
    face!([1.0, 0.0, 0.0], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]),
    // Top (+y)
    face!([0.0, 1.0, 0.0], [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]),
    // Bottom (-y)
    face!([0.0, -1.0, 0.0], [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]),
];

pub fn cube_indices() -> Vec<u16> {
    (0..6u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}
