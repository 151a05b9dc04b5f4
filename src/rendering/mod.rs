use macroquad::prelude::*;
use crate::application::{Camera, Command, Simulation};
use crate::domain::{Grid, Pattern};
use crate::input::centered_anchor;
use crate::ui::{Button, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the visible part of the grid, starting at the grid's viewport offset
pub fn draw_grid(grid: &Grid, camera: &Camera) {
    let cell_size = camera.cell_pixels();
    let (view_w, view_h) = camera.visible_cells(grid_area_width(), grid_area_height());

    let alive_color = Color::from_rgba(255, 232, 115, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = cell_size >= 6.0;

    for vy in 0..view_h {
        for vx in 0..view_w {
            let (screen_x, screen_y) = camera.view_to_screen(vx, vy);

            if grid.get_visible(vx as isize, vy as isize).is_alive() {
                draw_rectangle(screen_x, screen_y, cell_size, cell_size, alive_color);
            }
            if draw_grid_lines {
                draw_rectangle_lines(
                    screen_x,
                    screen_y,
                    cell_size,
                    cell_size,
                    1.0,
                    grid_line_color,
                );
            }
        }
    }
}

/// View cells covered by `pattern` centered on `cursor`, limited to the
/// visible `(columns, rows)` so nothing spills under the panel
fn preview_cells(
    pattern: &Pattern,
    cursor: (isize, isize),
    visible: (usize, usize),
) -> Vec<(usize, usize)> {
    let (start_x, start_y) = centered_anchor(pattern, cursor);
    pattern
        .cells
        .iter()
        .filter_map(|&(dx, dy)| {
            let px = usize::try_from(start_x.checked_add(dx)?).ok()?;
            let py = usize::try_from(start_y.checked_add(dy)?).ok()?;
            (px < visible.0 && py < visible.1).then_some((px, py))
        })
        .collect()
}

/// Draw a semi-transparent preview of a pattern centered on the cursor
pub fn draw_pattern_preview(pattern: &Pattern, camera: &Camera, mouse_pos: (f32, f32)) {
    let cell_size = camera.cell_pixels();
    let cursor = camera.screen_to_view(mouse_pos.0, mouse_pos.1);
    let visible = camera.visible_cells(grid_area_width(), grid_area_height());
    let ghost = Color::from_rgba(0, 255, 150, 120);

    for (px, py) in preview_cells(pattern, cursor, visible) {
        let (screen_x, screen_y) = camera.view_to_screen(px, py);
        draw_rectangle(screen_x, screen_y, cell_size, cell_size, ghost);
    }
}

/// Draw the control panel with buttons and status
pub fn draw_controls(
    sim: &Simulation,
    camera: &Camera,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let panel_color = Color::from_rgba(30, 30, 30, 255);
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), panel_color);

    buttons.iter().for_each(|button| {
        let active = match button.command() {
            Command::SetSpeed(ticks) => *ticks == sim.ticks_per_generation(),
            Command::ArmPattern(name) => {
                sim.pending_pattern().is_some_and(|p| p.name == name.as_str())
            }
            Command::SetAlgorithm(algorithm) => *algorithm == sim.algorithm(),
            _ => false,
        };
        button.draw(mouse_pos, active);
    });

    let px = panel_x() + 6.0;
    let top = buttons.last().map_or(20.0, Button::bottom) + 24.0;
    let (gw, gh) = sim.grid().dimensions();
    let (ox, oy) = sim.grid().offset();
    let status_color = if sim.is_paused() {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(0, 255, 0, 255)
    };

    let status = if sim.is_paused() { "Paused" } else { "Running" };
    let engine = format!("{} | {:.1}x | FPS {}", sim.algorithm().name(), camera.zoom, get_fps());
    let placing = sim.pending_pattern().map_or_else(
        || "Placing: none".to_owned(),
        |p| format!("Placing {}: {}", p.name, p.description),
    );

    let labels = [
        (status.to_owned(), 18.0, status_color),
        (format!("Generation: {}", sim.generation()), 14.0, WHITE),
        (format!("Population: {}", format_number(sim.grid().population())), 14.0, WHITE),
        (format!("Grid: {}x{}", gw, gh), 13.0, GRAY),
        (format!("Offset: ({}, {})", ox, oy), 13.0, GRAY),
        (engine, 13.0, GRAY),
        (placing, 13.0, SKYBLUE),
        ("Arrows/WASD: Pan".to_owned(), 12.0, GRAY),
        ("LMB: Paint  RMB: Erase".to_owned(), 12.0, GRAY),
        ("Space: Play  1-3: Speed".to_owned(), 12.0, GRAY),
        ("Esc: Cancel pattern".to_owned(), 12.0, GRAY),
    ];

    labels.iter().enumerate().for_each(|(idx, (text, size, color))| {
        draw_text(text, px, top + idx as f32 * 18.0, *size, *color);
    });
}
