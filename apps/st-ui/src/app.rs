use crate::views::PlotView;
use egui_file_dialog::FileDialog;
use st_app::{AppError, BrowserConfig, PlotSpec, Session};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ALL_CATEGORIES: &str = "All categories";

pub struct SurfTensionApp {
    config: BrowserConfig,
    session: Session,
    open_dialog: FileDialog,
    save_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    plot_view: PlotView,
    plot: Option<PlotSpec>,
    status: Option<Status>,
}

enum Status {
    Info(String),
    Error(String),
}

impl SurfTensionApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BrowserConfig) -> Self {
        let open_dialog = FileDialog::new()
            .add_file_filter(
                "JSON files",
                Arc::new(|p: &Path| has_extension(p, "json")),
            )
            .default_file_filter("JSON files");
        let save_dialog = FileDialog::new()
            .add_file_filter("CSV files", Arc::new(|p: &Path| has_extension(p, "csv")))
            .default_file_filter("CSV files");

        let mut app = Self {
            config,
            session: Session::new(),
            open_dialog,
            save_dialog,
            last_directory: None,
            plot_view: PlotView::default(),
            plot: None,
            status: None,
        };

        let startup = app.config.database_path.clone();
        if startup.exists() {
            app.open_database(startup);
        } else {
            app.status = Some(Status::Info(format!(
                "No database at {}; use \"Load database\" to open one",
                startup.display()
            )));
        }
        app
    }

    fn open_database(&mut self, path: PathBuf) {
        match self.session.load_from_path(&path) {
            Ok(summary) => {
                // Remember the directory for next time
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                self.plot = None;
                self.status = Some(Status::Info(format!(
                    "Loaded {} alloys in {} categories from {}",
                    summary.record_count,
                    summary.category_count,
                    path.display()
                )));
            }
            Err(e) => {
                self.status = Some(Status::Error(format!("Failed to load database: {}", e)));
            }
        }
    }

    fn change_category(&mut self, category: Option<String>) {
        self.session.select_category(category);
        if self.session.selected_alloy().is_none() {
            self.plot = None;
        }
    }

    fn select_alloy(&mut self, name: &str) {
        if let Err(e) = self.session.select_alloy(name) {
            self.status = Some(Status::Error(e.to_string()));
            return;
        }
        self.refresh_plot();
    }

    fn refresh_plot(&mut self) {
        match self.session.current_plot(self.config.fit_samples) {
            Ok(spec) => {
                self.plot = Some(spec);
                self.status = None;
            }
            Err(AppError::NoSelection) => self.plot = None,
            Err(e) => {
                self.plot = None;
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn request_export(&mut self) {
        if let Some(entry) = self.session.current_record() {
            self.save_dialog.config_mut().default_file_name = format!("{}.csv", entry.alloy());
            self.save_dialog.save_file();
        }
    }

    fn export_to(&mut self, path: &Path) {
        match self.session.export_current(path) {
            Ok(summary) => {
                self.status = Some(Status::Info(format!(
                    "Exported {} rows to {}",
                    summary.row_count,
                    summary.path.display()
                )));
            }
            Err(e) => {
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn show_selectors(&mut self, ui: &mut egui::Ui) {
        ui.heading("Alloy");
        if !self.session.is_loaded() {
            ui.label("No database loaded");
            return;
        }

        ui.label("Category:");
        let mut category = self.session.selected_category().map(str::to_owned);
        egui::ComboBox::from_id_salt("category_selector")
            .selected_text(category.as_deref().unwrap_or(ALL_CATEGORIES))
            .width(200.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut category, None, ALL_CATEGORIES);
                for name in self.session.categories() {
                    ui.selectable_value(&mut category, Some(name.clone()), name);
                }
            });
        if category.as_deref() != self.session.selected_category() {
            self.change_category(category);
        }

        ui.add_space(8.0);
        ui.label("Select an alloy:");
        let mut alloy = self.session.selected_alloy().map(str::to_owned);
        let choices = self.session.alloy_choices();
        egui::ComboBox::from_id_salt("alloy_selector")
            .selected_text(alloy.as_deref().unwrap_or(""))
            .width(200.0)
            .show_ui(ui, |ui| {
                for name in &choices {
                    ui.selectable_value(&mut alloy, Some(name.clone()), name);
                }
            });
        if let Some(name) = alloy
            && Some(name.as_str()) != self.session.selected_alloy()
        {
            self.select_alloy(&name);
        }

        ui.add_space(12.0);
        let can_export = self.session.current_record().is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("Download CSV"))
            .clicked()
        {
            self.request_export();
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

impl eframe::App for SurfTensionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Load database").clicked() {
                    if let Some(dir) = self.last_directory.clone() {
                        self.open_dialog.config_mut().initial_directory = dir;
                    }
                    self.open_dialog.select_file();
                }

                ui.separator();
                match self.session.source() {
                    Some(path) => ui.label(format!("Database: {}", path.display())),
                    None => ui.label("Database: none"),
                };
            });
        });

        self.open_dialog.update(ctx);
        if let Some(path) = self.open_dialog.take_selected() {
            self.open_database(path.to_path_buf());
        }

        self.save_dialog.update(ctx);
        if let Some(path) = self.save_dialog.take_selected() {
            self.export_to(&path);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| match &self.status {
            Some(Status::Info(message)) => {
                ui.label(message);
            }
            Some(Status::Error(message)) => {
                ui.colored_label(egui::Color32::RED, message);
            }
            None => {
                ui.label("Ready");
            }
        });

        egui::SidePanel::left("selection")
            .default_width(240.0)
            .show(ctx, |ui| self.show_selectors(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.plot_view.show(ui, self.plot.as_ref());
            });
        });
    }
}
