use crate::math::*;
use crate::render::{Mesh, MeshError};
use arrayvec::ArrayVec;
use std::path::{Path, PathBuf};

/// Errors produced while reading a Wavefront OBJ file.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read OBJ file '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: vertex index {index} does not refer to a vertex defined so far")]
    IndexOutOfRange { line: usize, index: i64 },

    #[error("line {line}: malformed statement")]
    MalformedLine { line: usize },

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// One resolved face corner.
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: Vec3,
    normal: Vec3,
}

/// Reads and parses the OBJ file at `path`.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ObjError::Io { path: path.to_path_buf(), source })?;
    let mesh = parse_obj(&text)?;
    log::info!("loaded '{}': {} triangles", path.display(), mesh.triangle_count());
    Ok(mesh)
}

/// Parses OBJ text into a flat triangle list, one mesh vertex per emitted face corner.
///
/// Only `v`, `vn` and `f` statements are interpreted, everything else is skipped.
/// A quad additionally emits its 1st, 3rd and 4th corners as a second triangle,
/// faces with five or more corners keep only their first three.
pub fn parse_obj(text: &str) -> Result<Mesh, ObjError> {
    let mut positions_read: Vec<Vec3> = Vec::new();
    let mut normals_read: Vec<Vec3> = Vec::new();
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => positions_read.push(parse_vec3(tokens, line_number)?),
            "vn" => normals_read.push(parse_vec3(tokens, line_number)?),
            "f" => {
                let tokens: Vec<&str> = tokens.collect();
                if tokens.len() < 3 {
                    return Err(ObjError::MalformedLine { line: line_number });
                }
                let mut corners = ArrayVec::<Corner, 4>::new();
                for token in tokens.iter().take(if tokens.len() == 4 { 4 } else { 3 }) {
                    corners.push(parse_corner(token, line_number, &positions_read, &normals_read)?);
                }
                let triangles: &[[usize; 3]] = if corners.len() == 4 { &[[0, 1, 2], [0, 2, 3]] } else { &[[0, 1, 2]] };
                for triangle in triangles {
                    for &corner in triangle {
                        positions.push(corners[corner].position);
                        normals.push(corners[corner].normal);
                    }
                }
            }
            _ => {}
        }
    }

    log::debug!(
        "parsed {} positions, {} normals, {} triangles",
        positions_read.len(),
        normals_read.len(),
        positions.len() / 3
    );
    Ok(Mesh::from_triangle_list(positions, normals)?)
}

fn parse_vec3<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<Vec3, ObjError> {
    let mut component = || -> Result<f32, ObjError> {
        let token = tokens.next().ok_or(ObjError::MalformedLine { line })?;
        parse_float(token, line)
    };
    Ok(Vec3::new(component()?, component()?, component()?))
}

fn parse_float(token: &str, line: usize) -> Result<f32, ObjError> {
    token.parse::<f32>().map_err(|_| ObjError::InvalidNumber { line, token: token.to_string() })
}

fn parse_index(token: &str, line: usize) -> Result<i64, ObjError> {
    token.parse::<i64>().map_err(|_| ObjError::InvalidNumber { line, token: token.to_string() })
}

/// Resolves `p`, `p/n`, `p/t/n` or `p//n`. With two fields the second one names the normal.
///
/// A single trailing `/` closes the last field instead of opening an empty one, so `1/2/`
/// reads as `1/2`. Four or more fields carry no normal.
fn parse_corner(token: &str, line: usize, positions: &[Vec3], normals: &[Vec3]) -> Result<Corner, ObjError> {
    let trimmed = token.strip_suffix('/').unwrap_or(token);
    let fields: ArrayVec<&str, 4> = trimmed.split('/').take(4).collect();

    let index = parse_index(fields[0], line)?;
    if index < 1 || index as usize > positions.len() {
        return Err(ObjError::IndexOutOfRange { line, index });
    }
    let position = positions[index as usize - 1];

    let normal_field = match fields.len() {
        2 => fields[1],
        3 => fields[2],
        _ => "",
    };
    let normal = if normal_field.is_empty() {
        Vec3::zero()
    } else {
        let index = parse_index(normal_field, line)?;
        if index >= 1 && (index as usize) <= normals.len() { normals[index as usize - 1] } else { Vec3::zero() }
    };

    Ok(Corner { position, normal })
}
