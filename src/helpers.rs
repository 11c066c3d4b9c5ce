use glam::Vec2;
use ratatui::layout::Rect;

pub fn centered_rect_with_percentage(percent_x: u16, percent_y: u16, cols: u16, rows: u16) -> Rect {
    let width = cols * percent_x / 100;
    let height = std::cmp::min(std::cmp::max(rows * percent_y / 100, 5), rows);
    Rect::new((cols - width) / 2, (rows - height) / 2, width, height)
}

/// Virtual screen point to canvas coordinates (canvas y grows upwards).
pub fn to_canvas(point: Vec2, screen: Vec2) -> (f64, f64) {
    (point.x as f64, (screen.y - point.y) as f64)
}

/// Size of one half-block pixel in virtual units when `screen` is stretched
/// over `area`.
pub fn pixel_size(screen: Vec2, area: Rect) -> (f64, f64) {
    let cols = area.width.max(1) as f64;
    let rows = area.height.max(1) as f64 * 2.0;
    (screen.x as f64 / cols, screen.y as f64 / rows)
}

/// Terminal row covering virtual `y`.
pub fn row_for(y: f32, screen: Vec2, area: Rect) -> u16 {
    let t = (y / screen.y).clamp(0.0, 1.0);
    let offset = (t * area.height as f32) as u16;
    area.y + offset.min(area.height.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_flips_y() {
        let screen = Vec2::new(1280.0, 720.0);
        assert_eq!(to_canvas(Vec2::new(10.0, 0.0), screen), (10.0, 720.0));
        assert_eq!(to_canvas(Vec2::new(10.0, 720.0), screen), (10.0, 0.0));
    }

    #[test]
    fn rows_stay_inside_area() {
        let screen = Vec2::new(1280.0, 720.0);
        let area = Rect::new(1, 1, 80, 30);
        assert_eq!(row_for(0.0, screen, area), 1);
        assert_eq!(row_for(360.0, screen, area), 16);
        assert_eq!(row_for(720.0, screen, area), 30);
        assert_eq!(row_for(9_000.0, screen, area), 30);
    }

    #[test]
    fn pixels_cover_the_screen() {
        let (w, h) = pixel_size(Vec2::new(1280.0, 720.0), Rect::new(0, 0, 128, 36));
        assert_eq!(w, 10.0);
        assert_eq!(h, 10.0);
    }

    #[test]
    fn percentage_rect_is_centered() {
        let rect = centered_rect_with_percentage(50, 20, 100, 40);
        assert_eq!(rect, Rect::new(25, 16, 50, 8));
    }
}
