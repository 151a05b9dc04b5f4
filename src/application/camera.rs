/// Camera owns the pixel <-> viewport-cell mapping for the front end.
/// Where the viewport sits on the grid is the grid's own offset; the
/// camera only knows how big a cell is on screen.
pub struct Camera {
    pub cell_size: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.5, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.5, 10.0);
    }

    /// On-screen size of one cell in pixels
    pub fn cell_pixels(&self) -> f32 {
        self.cell_size * self.zoom
    }

    /// Convert screen coordinates to viewport cell coordinates
    pub fn screen_to_view(&self, screen_x: f32, screen_y: f32) -> (isize, isize) {
        let size = self.cell_pixels();
        ((screen_x / size).floor() as isize, (screen_y / size).floor() as isize)
    }

    /// Top-left pixel of a viewport cell
    pub fn view_to_screen(&self, view_x: usize, view_y: usize) -> (f32, f32) {
        let size = self.cell_pixels();
        (view_x as f32 * size, view_y as f32 * size)
    }

    /// How many cells (rounded up) fit in an area of the given pixel size
    pub fn visible_cells(&self, area_width: f32, area_height: f32) -> (usize, usize) {
        let size = self.cell_pixels();
        (
            (area_width / size).ceil().max(0.0) as usize,
            (area_height / size).ceil().max(0.0) as usize,
        )
    }

    /// Reset zoom to default
    pub fn reset(&mut self) {
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(10.0)
    }
}
