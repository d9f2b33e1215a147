use bytemuck::Pod;

pub struct Buffer<T> {
    /// Width of usable elements in the buffer
    pub width: usize,

    /// Height of usable elements in the buffer
    pub height: usize,

    /// Number of elements between the rows
    pub stride: usize,

    /// The actual elements in the buffer, row-major
    pub elems: Vec<T>,
}

impl<T: Copy + Pod> Buffer<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, T::zeroed())
    }

    pub fn new_filled(width: usize, height: usize, with: T) -> Self {
        let stride = width;
        let elems = vec![with; stride * height];
        Self { width, height, stride, elems }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        assert!(x < self.width, "x out of bounds: {} >= {}", x, self.width);
        assert!(y < self.height, "y out of bounds: {} >= {}", y, self.height);
        self.elems[y * self.stride + x]
    }

    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut T {
        assert!(x < self.width, "x out of bounds: {} >= {}", x, self.width);
        assert!(y < self.height, "y out of bounds: {} >= {}", y, self.height);
        &mut self.elems[y * self.stride + x]
    }

    pub fn as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.elems)
    }

    pub fn fill(&mut self, with: T) {
        self.elems.fill(with);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RGBA;

    #[test]
    fn test_new_filled_and_access() {
        let mut buffer = Buffer::<f32>::new_filled(3, 2, 1.0);
        assert_eq!(buffer.elems.len(), 6);
        assert!(buffer.elems.iter().all(|&d| d == 1.0));
        *buffer.at_mut(2, 1) = 0.25;
        assert_eq!(buffer.at(2, 1), 0.25);
        assert_eq!(buffer.elems[5], 0.25);
    }

    #[test]
    fn test_rgba_buffer_as_bytes() {
        let buffer = Buffer::<RGBA>::new_filled(2, 2, RGBA::new(10, 20, 30, 255));
        assert_eq!(buffer.as_u8_slice().len(), 2 * 2 * 4);
        assert_eq!(&buffer.as_u8_slice()[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_access_panics() {
        let buffer = Buffer::<u32>::new(4, 4);
        buffer.at(4, 0);
    }
}
