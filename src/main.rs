use macroquad::prelude::*;
use expanding_life::{
    Camera, Command, Simulation, SimulationConfig,
    input, rendering,
    ui::{self, CELL_SIZE},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut camera = Camera::new(CELL_SIZE);
    let (view_w, view_h) = camera.visible_cells(ui::grid_area_width(), ui::grid_area_height());
    let config = SimulationConfig::default().with_viewport(view_w, view_h);
    log::info!("starting with {:?}", config);
    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        input::handle_zoom(&mut camera);
        let (view_w, view_h) = camera.visible_cells(ui::grid_area_width(), ui::grid_area_height());

        let mut commands = vec![Command::ResizeViewport(view_w, view_h)];
        commands.extend(input::button_commands(&buttons, mouse_pos));
        commands.extend(input::keyboard_commands(&mut camera));
        commands.extend(input::mouse_commands(&sim, &camera, mouse_pos));

        for command in commands {
            if let Err(err) = sim.handle_command(command) {
                log::warn!("command rejected: {err}");
            }
        }

        sim.tick();

        clear_background(Color::from_rgba(75, 139, 190, 255));
        rendering::draw_grid(sim.grid(), &camera);
        if let Some(pattern) = sim.pending_pattern() {
            if mouse_pos.0 < ui::grid_area_width() {
                rendering::draw_pattern_preview(pattern, &camera, mouse_pos);
            }
        }
        rendering::draw_controls(&sim, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
