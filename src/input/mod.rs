use macroquad::prelude::*;
use crate::application::{Camera, Command, Direction, Simulation, Speed};
use crate::domain::{Grid, Pattern};
use crate::ui::{Button, PAN_STEP, RESEED_FRACTION, grid_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Grid storage coordinates under the cursor
pub fn cursor_cell(grid: &Grid, camera: &Camera, mouse_pos: (f32, f32)) -> (isize, isize) {
    let (vx, vy) = camera.screen_to_view(mouse_pos.0, mouse_pos.1);
    grid.view_to_grid(vx, vy)
}

/// Anchor that centers `pattern` on `cell`
pub fn centered_anchor(pattern: &Pattern, cell: (isize, isize)) -> (isize, isize) {
    let (min_dx, min_dy, width, height) = pattern.bounds();
    (
        cell.0.saturating_sub(min_dx).saturating_sub(width as isize / 2),
        cell.1.saturating_sub(min_dy).saturating_sub(height as isize / 2),
    )
}

/// Mouse painting on the grid area.
/// An armed pattern is stamped once per click; plain painting follows the
/// held button. Right click cancels an armed pattern or erases a cell.
pub fn mouse_commands(sim: &Simulation, camera: &Camera, mouse_pos: (f32, f32)) -> Vec<Command> {
    if mouse_pos.0 >= grid_area_width() {
        return Vec::new();
    }

    let cell = cursor_cell(sim.grid(), camera, mouse_pos);
    match sim.pending_pattern() {
        Some(pattern) => {
            if is_mouse_button_pressed(MouseButton::Right) {
                vec![Command::DisarmPattern]
            } else if is_mouse_button_pressed(MouseButton::Left) {
                let (x, y) = centered_anchor(pattern, cell);
                vec![Command::Paint(x, y)]
            } else {
                Vec::new()
            }
        }
        None if is_mouse_button_down(MouseButton::Left) => vec![Command::Paint(cell.0, cell.1)],
        None if is_mouse_button_down(MouseButton::Right) => vec![Command::Erase(cell.0, cell.1)],
        None => Vec::new(),
    }
}

/// Map keyboard presses to commands
pub fn keyboard_commands(camera: &mut Camera) -> Vec<Command> {
    let bindings: [(KeyCode, Command); 15] = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Reseed(RESEED_FRACTION)),
        (KeyCode::Escape, Command::DisarmPattern),
        (KeyCode::Key1, Command::SetSpeed(Speed::Slow.ticks_per_generation())),
        (KeyCode::Key2, Command::SetSpeed(Speed::Normal.ticks_per_generation())),
        (KeyCode::Key3, Command::SetSpeed(Speed::Fast.ticks_per_generation())),
        (KeyCode::Left, Command::Pan(Direction::Left, PAN_STEP)),
        (KeyCode::Right, Command::Pan(Direction::Right, PAN_STEP)),
        (KeyCode::Up, Command::Pan(Direction::Up, PAN_STEP)),
        (KeyCode::Down, Command::Pan(Direction::Down, PAN_STEP)),
        (KeyCode::A, Command::Pan(Direction::Left, PAN_STEP)),
        (KeyCode::D, Command::Pan(Direction::Right, PAN_STEP)),
        (KeyCode::W, Command::Pan(Direction::Up, PAN_STEP)),
        (KeyCode::S, Command::Pan(Direction::Down, PAN_STEP)),
    ];

    // Reset zoom with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
}

/// Commands from panel buttons clicked this frame
pub fn button_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter_map(|button| button.clicked(mouse_pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patterns;

    #[test]
    fn test_centered_anchor_puts_pattern_around_cursor() {
        assert_eq!(centered_anchor(&patterns::PULSAR, (20, 20)), (14, 14));
        // blinker is already centered on its anchor
        assert_eq!(centered_anchor(&patterns::BLINKER, (5, 5)), (5, 5));
    }

    #[test]
    fn test_cursor_cell_follows_grid_offset() {
        let mut grid = Grid::empty(20, 20);
        grid.shift_view(3, 2).unwrap();
        let camera = Camera::new(10.0);
        assert_eq!(cursor_cell(&grid, &camera, (15.0, 5.0)), (4, 2));
    }
}
