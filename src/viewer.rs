use anyhow::Context;
use clap::Parser;
use eframe::egui;
use hexgrid::{
    painter::{from_pos, EguiSurface},
    util::transforms::Transform,
    AnalogStick, AppConfig, GridViewState, StickPoller, Vec2,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{path::PathBuf, time::Instant};

/// Keys that move the selection, in the order they're listed in the menu bar
const MOVE_KEYS: [(egui::Key, char); 6] = [
    (egui::Key::Q, 'q'),
    (egui::Key::W, 'w'),
    (egui::Key::E, 'e'),
    (egui::Key::A, 'a'),
    (egui::Key::S, 's'),
    (egui::Key::D, 'd'),
];

/// Space kept around the grid, in tiles
const PADDING_TILES: f32 = 0.5;

/// Interactive hex grid viewer. Move the highlighted tile with q/w/e/a/s/d,
/// or with a gamepad stick when built with the `gamepad` feature.
#[derive(Debug, Parser)]
#[command(name = "viewer")]
struct Args {
    /// Path to a TOML config file. Defaults are used if it doesn't exist
    #[arg(short, long, default_value = "hexgrid.toml")]
    config: PathBuf,

    /// The logging level. See https://docs.rs/log/latest/log/enum.LevelFilter.html
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    let config = AppConfig::load(&args.config)?;
    let state = config.build_state().context("error building grid")?;
    info!(
        "Showing {}x{} grid, selection at {}",
        state.grid().columns(),
        state.grid().rows(),
        config.start()
    );

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Hex Grid",
        native_options,
        Box::new(move |cc| Box::new(HexGridViewer::new(cc, config, state))),
    )
    .map_err(|err| anyhow::anyhow!("eframe failed to start: {}", err))
}

struct HexGridViewer {
    config: AppConfig,
    state: GridViewState,
    stick: Option<Box<dyn AnalogStick>>,
    poller: StickPoller,
    pointer_info: String,
}

impl HexGridViewer {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, state: GridViewState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let poller = config.stick_poller();
        Self {
            config,
            state,
            stick: open_stick(),
            poller,
            pointer_info: String::new(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let pressed: Vec<char> = ctx.input(|i| {
            MOVE_KEYS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, c)| *c)
                .collect()
        });
        for key in pressed {
            self.state.handle_key(key);
        }

        if let Some(stick) = self.stick.as_deref_mut() {
            if let Some(direction) = self.poller.poll(stick, Instant::now()) {
                self.state.move_selection(direction);
            }
        }
    }

    fn paint_grid(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let grid = self.state.grid();
        let Some((min, max)) = grid.bounds() else {
            return;
        };
        let padding =
            Vec2::new(grid.tile_width(), grid.tile_height()) * PADDING_TILES;
        let grid_to_screen = Transform::new_letterboxed(
            min - padding,
            max + padding,
            from_pos(rect.min),
            from_pos(rect.max),
        );

        self.pointer_info = match ctx.pointer_latest_pos() {
            None => String::new(),
            Some(pos) => {
                let point = grid_to_screen.inverse().map_point(from_pos(pos));
                match (grid.pick(point), self.state.selection()) {
                    (Some(tile), Some(selection)) => format!(
                        "Tile {} ({} from selection)",
                        tile,
                        grid.distance(tile, selection.position)
                    ),
                    (Some(tile), None) => format!("Tile {}", tile),
                    (None, _) => String::new(),
                }
            }
        };

        let painter = ui.painter_at(rect);
        let mut surface =
            EguiSurface::new(&painter, grid_to_screen, self.config.view.font_size);
        self.state.render(&mut surface);
    }
}

impl eframe::App for HexGridViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    match self.state.selection() {
                        Some(selection) => {
                            ui.label(format!("Selected: {}", selection.position))
                        }
                        None => ui.label("Nothing selected"),
                    };
                    let keys: String = MOVE_KEYS.iter().map(|(_, c)| *c).collect();
                    ui.label(format!("Move with {}", keys));
                    if ui.button("Reset").clicked() {
                        self.state.select(self.config.start());
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.pointer_info);
                });
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| self.paint_grid(ctx, ui));

        ctx.request_repaint_after(self.config.redraw_interval());
    }
}

#[cfg(feature = "gamepad")]
fn open_stick() -> Option<Box<dyn AnalogStick>> {
    match hexgrid::gamepad::GilrsStick::new() {
        Ok(stick) => Some(Box::new(stick)),
        Err(err) => {
            log::warn!("{:#}", err);
            None
        }
    }
}

#[cfg(not(feature = "gamepad"))]
fn open_stick() -> Option<Box<dyn AnalogStick>> {
    None
}
