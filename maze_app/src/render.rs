//! ASCII rasterizer for draw command lists
//!
//! Scales the game's pixel frame down onto a character grid so headless
//! runs can show the maze in a terminal. Commands paint in list order,
//! later ones over earlier ones, matching how a real canvas would layer
//! them: walls as `#`, the goal as `G`, the player as `o`, banner text as
//! itself.

use maze_core::prelude::DrawCommand;

/// Character grid dimensions
#[derive(Debug, Clone, Copy)]
pub struct GridSize {
    /// Columns across
    pub cols: usize,
    /// Rows down
    pub rows: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        // 96x27 keeps a 1280x720 frame close to square cells in a terminal
        Self { cols: 96, rows: 27 }
    }
}

/// Rasterize one frame's draw list into a newline-joined grid
pub fn render_frame(
    commands: &[DrawCommand],
    frame_width: f32,
    frame_height: f32,
    grid: GridSize,
) -> String {
    let mut cells = vec![vec!['.'; grid.cols]; grid.rows];
    let cell_width = frame_width / grid.cols as f32;
    let cell_height = frame_height / grid.rows as f32;

    let mut circles_seen = 0;
    for command in commands {
        match command {
            DrawCommand::Rect {
                center,
                half_extents,
                ..
            } => {
                stamp(&mut cells, cell_width, cell_height, '#', |px, py| {
                    (px - center.x).abs() <= half_extents.x
                        && (py - center.y).abs() <= half_extents.y
                });
            }
            DrawCommand::Circle { center, radius, .. } => {
                // The core emits the goal circle before the player circle
                let glyph = if circles_seen == 0 { 'G' } else { 'o' };
                circles_seen += 1;
                stamp(&mut cells, cell_width, cell_height, glyph, |px, py| {
                    let dx = px - center.x;
                    let dy = py - center.y;
                    dx * dx + dy * dy <= radius * radius
                });
            }
            DrawCommand::Text { text, anchor, .. } => {
                plot_text(&mut cells, cell_width, cell_height, text, anchor.x, anchor.y);
            }
        }
    }

    let mut out = String::with_capacity(grid.rows * (grid.cols + 1));
    for row in &cells {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Paint every cell whose center the predicate covers
fn stamp<F: Fn(f32, f32) -> bool>(
    cells: &mut [Vec<char>],
    cell_width: f32,
    cell_height: f32,
    glyph: char,
    covers: F,
) {
    for (row, line) in cells.iter_mut().enumerate() {
        let py = (row as f32 + 0.5) * cell_height;
        for (col, cell) in line.iter_mut().enumerate() {
            let px = (col as f32 + 0.5) * cell_width;
            if covers(px, py) {
                *cell = glyph;
            }
        }
    }
}

/// Write text left-to-right from the scaled anchor, clipped at the edge
fn plot_text(
    cells: &mut [Vec<char>],
    cell_width: f32,
    cell_height: f32,
    text: &str,
    x: f32,
    y: f32,
) {
    let row = (y / cell_height) as usize;
    let start = (x / cell_width) as usize;
    if let Some(line) = cells.get_mut(row) {
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = line.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::prelude::*;

    #[test]
    fn test_render_shows_walls_goal_and_player() {
        let mut game = MazeGame::new(MazeConfig::default()).unwrap();
        let commands = game.step(&FrameInput::idle());
        let frame = game.config().frame;
        let picture = render_frame(
            &commands,
            frame.width as f32,
            frame.height as f32,
            GridSize::default(),
        );

        assert_eq!(picture.lines().count(), 27);
        assert!(picture.contains('#'));
        assert!(picture.contains('G'));
        assert!(picture.contains('o'));
    }

    #[test]
    fn test_banner_text_lands_in_the_grid() {
        let commands = vec![DrawCommand::Text {
            text: "YOU WIN!".to_string(),
            anchor: Point2::new(400.0, 350.0),
            scale: 1.5,
            color: Color::new(0, 255, 0),
        }];
        let picture = render_frame(&commands, 1280.0, 720.0, GridSize::default());
        assert!(picture.contains("YOU WIN!"));
    }

    #[test]
    fn test_player_paints_over_goal_when_overlapping() {
        let commands = vec![
            DrawCommand::Circle {
                center: Point2::new(640.0, 360.0),
                radius: 60.0,
                color: Color::new(0, 255, 0),
            },
            DrawCommand::Circle {
                center: Point2::new(640.0, 360.0),
                radius: 60.0,
                color: Color::new(255, 0, 0),
            },
        ];
        let picture = render_frame(&commands, 1280.0, 720.0, GridSize::default());
        assert!(picture.contains('o'));
        assert!(!picture.contains('G'));
    }
}
