//! # Render
//!
//! Draws a planned route onto the terrain image. Each segment is drawn as a chain of 1 pixel
//! wide lines between its consecutive points, rasterised with Bresenham's algorithm.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};

use crate::nav::{GridCoord, GridPath};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Default colour routes are drawn in
pub const DEFAULT_ROUTE_COLOUR: [u8; 3] = [200, 100, 230];

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Iterator over the pixels of a line, both ends included.
struct BresenhamLine {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    x_inc: i64,
    y_inc: i64,
    error: i64,
    steep: bool,
    end_x: i64,
    end_y: i64,
    done: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Couldn't save the rendered route: {0}")]
    SaveError(image::ImageError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl BresenhamLine {
    fn new(start: GridCoord, end: GridCoord) -> Self {
        let (sx, sy) = (start.x as i64, start.y as i64);
        let (ex, ey) = (end.x as i64, end.y as i64);

        let dx = (ex - sx).abs();
        let dy = (ey - sy).abs();
        let steep = dy > dx;

        let (x, y, end_x, end_y, dx, dy) = if steep {
            (sy, sx, ey, ex, dy, dx)
        } else {
            (sx, sy, ex, ey, dx, dy)
        };

        Self {
            x,
            y,
            dx,
            dy,
            x_inc: if end_x > x { 1 } else { -1 },
            y_inc: if end_y > y { 1 } else { -1 },
            error: dx / 2,
            steep,
            end_x,
            end_y,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = if self.steep {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        };

        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(result);
        }

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.y_inc;
            self.error += self.dx;
        }
        self.x += self.x_inc;

        Some(result)
    }
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Draw the segments of a route onto the image. Pixels outside the image are ignored.
pub fn draw_route(image: &mut RgbImage, segments: &[GridPath], colour: [u8; 3]) {
    let (width, height) = image.dimensions();

    for segment in segments {
        for pair in segment.points.windows(2) {
            for (x, y) in BresenhamLine::new(pair[0], pair[1]) {
                if x >= 0 && y >= 0 && x < width as i64 && y < height as i64 {
                    image.put_pixel(x as u32, y as u32, Rgb(colour));
                }
            }
        }
    }
}

/// Draw the route onto a copy of the terrain image and save it to `path`. The output format is
/// chosen from the extension of `path`.
pub fn render_route<P: AsRef<Path>>(
    terrain_image: &DynamicImage,
    segments: &[GridPath],
    colour: [u8; 3],
    path: P,
) -> Result<(), RenderError> {
    let mut image = terrain_image.to_rgb8();

    draw_route(&mut image, segments, colour);

    image.save(path).map_err(RenderError::SaveError)
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const BACKGROUND: [u8; 3] = [248, 148, 18];

    fn coloured(image: &RgbImage) -> Vec<(u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == DEFAULT_ROUTE_COLOUR)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_bresenham() {
        let line: Vec<(i64, i64)> =
            BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(4, 2)).collect();
        assert_eq!(line.first(), Some(&(0, 0)));
        assert_eq!(line.last(), Some(&(4, 2)));
        assert_eq!(line.len(), 5);

        let line: Vec<(i64, i64)> =
            BresenhamLine::new(GridCoord::new(3, 5), GridCoord::new(3, 1)).collect();
        assert_eq!(line, vec![(3, 5), (3, 4), (3, 3), (3, 2), (3, 1)]);

        let single: Vec<(i64, i64)> =
            BresenhamLine::new(GridCoord::new(2, 2), GridCoord::new(2, 2)).collect();
        assert_eq!(single, vec![(2, 2)]);
    }

    #[test]
    fn test_draw_route() {
        let mut image = RgbImage::from_pixel(6, 6, Rgb(BACKGROUND));

        let segments = vec![
            GridPath {
                points: vec![
                    GridCoord::new(0, 0),
                    GridCoord::new(1, 0),
                    GridCoord::new(1, 1),
                ],
            },
            GridPath {
                points: vec![GridCoord::new(4, 4), GridCoord::new(4, 5)],
            },
        ];

        draw_route(&mut image, &segments, DEFAULT_ROUTE_COLOUR);

        // Only the segments are drawn, not the jump between them
        assert_eq!(
            coloured(&image),
            vec![(0, 0), (1, 0), (1, 1), (4, 4), (4, 5)]
        );
        assert_eq!(image.get_pixel(2, 2).0, BACKGROUND);
    }

    #[test]
    fn test_render_route() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.png");

        let terrain = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb(BACKGROUND)));
        let segments = vec![GridPath {
            points: vec![GridCoord::new(0, 3), GridCoord::new(3, 3)],
        }];

        render_route(&terrain, &segments, DEFAULT_ROUTE_COLOUR, &path).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(coloured(&saved), vec![(0, 3), (1, 3), (2, 3), (3, 3)]);

        // The source image is untouched
        assert_eq!(terrain.to_rgb8().get_pixel(0, 3).0, BACKGROUND);
    }
}
