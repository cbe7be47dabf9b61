use crate::{element::Handle, error::Error, mesh::Mesh};
use glam::{Vec3, vec3};

impl Mesh {
    /// Makes a box with the following topology, spanning from the min point to
    /// the max point.
    ///
    ///  ```text
    ///       7-----------6
    ///      /|          /|
    ///     / |         / |
    ///    4-----------5  |
    ///    |  |        |  |
    ///    |  3--------|--2
    ///    | /         | /
    ///    |/          |/
    ///    0-----------1
    ///  ```
    pub fn quad_box(min: Vec3, max: Vec3) -> Result<Self, Error> {
        const BOX_POS: [(bool, bool, bool); 8] = [
            (false, false, false),
            (true, false, false),
            (true, true, false),
            (false, true, false),
            (false, false, true),
            (true, false, true),
            (true, true, true),
            (false, true, true),
        ];
        const BOX_IDX: [[usize; 4]; 6] = [
            [0, 3, 2, 1],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [4, 5, 6, 7],
        ];
        let mut qbox = Self::with_capacity(8, 12, 6);
        let pos = BOX_POS.map(|(xf, yf, zf)| {
            vec3(
                if xf { max.x } else { min.x },
                if yf { max.y } else { min.y },
                if zf { max.z } else { min.z },
            )
        });
        let verts = qbox.add_vertices(&pos);
        debug_assert!(
            verts.iter().enumerate().all(|(i, v)| v.index() as usize == i),
            "Vertices are expected to be in one contiguous range"
        );
        for quad in BOX_IDX {
            qbox.add_face(&quad.map(|i| verts[i]))?;
        }
        Ok(qbox)
    }

    /// Create a mesh representing a box with quadrilateral faces, of size 1,
    /// spanning from the origin to (1, 1, 1).
    pub fn unit_box() -> Result<Self, Error> {
        Self::quad_box(Vec3::ZERO, Vec3::ONE)
    }

    /// Create a tetrahedron centered at the origin, with the given
    /// circumradius.
    pub fn tetrahedron(radius: f32) -> Result<Self, Error> {
        let mut mesh = Self::with_capacity(4, 6, 4);
        let a = radius * (1.0f32 / 3.0);
        let b = radius * (8.0f32 / 9.0).sqrt();
        let c = radius * (2.0f32 / 9.0).sqrt();
        let d = radius * (2.0f32 / 3.0).sqrt();
        let v = mesh.add_vertices(&[
            vec3(0.0, 0.0, radius),
            vec3(-c, d, -a),
            vec3(-c, -d, -a),
            vec3(b, 0.0, -a),
        ]);
        mesh.add_tri_face(v[0], v[1], v[2])?;
        mesh.add_tri_face(v[0], v[2], v[3])?;
        mesh.add_tri_face(v[0], v[3], v[1])?;
        mesh.add_tri_face(v[3], v[2], v[1])?;
        Ok(mesh)
    }
}
