use snake_common::games::snake::{Cell, RenderSink, Rgb};

/// RGB pixel buffer the game is painted onto. The grid origin sits at the canvas center and y grows upward.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_color(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, 255])
            .collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, left: i64, top: i64, size: i64, color: Rgb) {
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = (left + size).min(self.width as i64);
        let y1 = (top + size).min(self.height as i64);

        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }
}

impl RenderSink for PixelCanvas {
    fn clear(&mut self) {
        self.fill(Rgb::WHITE);
    }

    fn paint_cell(&mut self, cell: Cell, color: Rgb, cell_size: u32) {
        let size = cell_size as i64;
        let left = self.width as i64 / 2 + cell.x as i64 * size;
        let top = self.height as i64 / 2 - (cell.y as i64 + 1) * size;
        self.fill_rect(left, top, size, color);
    }
}
