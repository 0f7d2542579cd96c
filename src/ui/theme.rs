//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::board::Pos;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// X plays dark stones, O light ones
pub const X_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const X_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const O_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const O_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BUTTON: Color32 = Color32::from_rgb(60, 100, 70);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points (hoshi) for a board of `size`: four corner points and the
/// centre on odd sizes. Boards under 7 get none.
pub fn star_points(size: usize) -> Vec<Pos> {
    if size < 7 {
        return Vec::new();
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let far = (size - 1 - edge) as u8;
    let near = edge as u8;

    let mut points = vec![
        Pos::new(near, near),
        Pos::new(near, far),
        Pos::new(far, near),
        Pos::new(far, far),
    ];
    if size % 2 == 1 {
        let mid = (size / 2) as u8;
        points.push(Pos::new(mid, mid));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points() {
        assert!(star_points(5).is_empty());
        assert_eq!(star_points(10).len(), 4);
        assert_eq!(star_points(10)[3], Pos::new(7, 7));

        let points = star_points(19);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&Pos::new(3, 15)));
        assert!(points.contains(&Pos::new(9, 9)));
    }
}
