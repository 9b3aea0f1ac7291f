use std::collections::VecDeque;
use std::time::Duration;

use editbox::edit_core::{Alignment, EditEvent, TextSize};
use editbox::widgets::{AnimatedPicture, EditBox, EditBoxStyle, Gui, WidgetId};
use egui::{
    Align2, CentralPanel, Color32, ColorImage, Context, FontId, Pos2, Rect, SidePanel,
    TextureHandle, TextureOptions, Vec2,
};
use mimalloc::MiMalloc;
use platform::HostApp;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const STYLE: &str = include_str!("../assets/edit_box.toml");
const LOG_LINES: usize = 16;
const LABEL_X: f32 = 24.0;
const BOX_X: f32 = 150.0;
const ROW_H: f32 = 48.0;

#[derive(Default)]
struct Demo {
    gui: Option<Gui>,
    labels: Vec<(WidgetId, &'static str)>,
    /// Kept alive for as long as the picture shows them.
    textures: Vec<TextureHandle>,
    log: VecDeque<String>,
}

fn row_rect(row: usize) -> Rect {
    Rect::from_min_size(
        Pos2::new(BOX_X, 24.0 + row as f32 * ROW_H),
        Vec2::new(260.0, 32.0),
    )
}

impl Demo {
    fn add_box(
        &mut self,
        gui: &mut Gui,
        ctx: &Context,
        style: EditBoxStyle,
        label: &'static str,
        configure: impl FnOnce(&mut EditBox),
    ) {
        let mut edit = EditBox::new(ctx, gui.clipboard());
        edit.set_style(style);
        edit.layout(row_rect(self.labels.len()));
        configure(&mut edit);
        let id = gui.add(edit);
        self.labels.push((id, label));
    }

    fn add_spinner(&mut self, gui: &mut Gui, ctx: &Context) {
        const SIDE: usize = 16;
        let colors = [
            Color32::from_rgb(219, 68, 55),
            Color32::from_rgb(244, 180, 0),
            Color32::from_rgb(15, 157, 88),
            Color32::from_rgb(66, 133, 244),
        ];

        let mut picture = AnimatedPicture::new();
        picture.layout(Rect::from_min_size(
            Pos2::new(BOX_X, 24.0 + self.labels.len() as f32 * ROW_H),
            Vec2::splat(32.0),
        ));
        for (i, color) in colors.into_iter().enumerate() {
            let rgba: Vec<u8> = std::iter::repeat_n(color.to_array(), SIDE * SIDE)
                .flatten()
                .collect();
            let image = ColorImage::from_rgba_unmultiplied([SIDE, SIDE], &rgba);
            let texture = ctx.load_texture(format!("spinner:{i}"), image, TextureOptions::NEAREST);
            picture.add_frame(texture.id(), Vec2::splat(32.0), Duration::from_millis(250));
            self.textures.push(texture);
        }
        picture.set_looping(true);
        picture.play();

        let id = gui.add(picture);
        self.labels.push((id, "picture"));
    }

    fn label(&self, id: WidgetId) -> &'static str {
        self.labels
            .iter()
            .find(|(wid, _)| *wid == id)
            .map_or("?", |(_, label)| label)
    }

    fn record(&mut self, id: WidgetId, event: EditEvent) {
        let label = self.label(id);
        let line = match event {
            EditEvent::TextChanged(text) => format!("{label}: changed ({} chars)", text.chars().count()),
            EditEvent::ReturnPressed(text) => format!("{label}: return \"{text}\""),
        };
        log::info!(target: "editbox", "{line}");

        self.log.push_back(line);
        while self.log.len() > LOG_LINES {
            self.log.pop_front();
        }
    }
}

impl HostApp for Demo {
    fn setup(&mut self, ctx: &Context) {
        let style = EditBoxStyle::from_toml_str(STYLE).unwrap_or_else(|err| {
            log::warn!(target: "editbox", "bundled style rejected: {err}");
            EditBoxStyle::default()
        });

        let mut gui = Gui::new(ctx);
        self.add_box(&mut gui, ctx, style, "name", |edit| {
            edit.set_default_text("Your name");
        });
        self.add_box(&mut gui, ctx, style, "password", |edit| {
            edit.set_default_text("Password");
            edit.engine_mut().set_password_character('*');
        });
        self.add_box(&mut gui, ctx, style, "amount", |edit| {
            edit.set_default_text("Up to 8 digits");
            edit.engine_mut().set_numbers_only(true);
            edit.engine_mut().set_maximum_characters(8);
        });
        self.add_box(&mut gui, ctx, style, "centered", |edit| {
            edit.engine_mut().set_alignment(Alignment::Center);
            edit.engine_mut().set_limit_text_width(true);
            edit.set_text("fits the box");
        });
        self.add_box(&mut gui, ctx, style, "small", |edit| {
            edit.engine_mut().set_text_size(TextSize::Fixed(13.0));
            edit.engine_mut().set_alignment(Alignment::Right);
            edit.set_text("fixed 13px, right aligned");
        });
        self.add_spinner(&mut gui, ctx);

        // Initial texts are not user edits.
        gui.take_events();
        self.gui = Some(gui);
    }

    fn ui(&mut self, ctx: &Context) {
        let Some(mut gui) = self.gui.take() else {
            return;
        };

        SidePanel::right("events")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Events");
                for line in &self.log {
                    ui.monospace(line);
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            gui.show(ui);
            let painter = ui.painter();
            for (row, (_, label)) in self.labels.iter().enumerate() {
                painter.text(
                    Pos2::new(LABEL_X, row_rect(row).center().y),
                    Align2::LEFT_CENTER,
                    *label,
                    FontId::proportional(14.0),
                    ui.visuals().text_color(),
                );
            }
        });

        for (id, event) in gui.take_events() {
            self.record(id, event);
        }
        self.gui = Some(gui);
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = platform::run("Edit box demo", Demo::default()) {
        eprintln!("editbox: {err}");
        std::process::exit(1);
    }
}
