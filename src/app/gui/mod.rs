//! 桌面前端：eframe 窗口、菜单栏、文本区域
//!
//! 文本控件持有自己的 `String`，每次编辑后把整段文本交给 EditorShell；
//! 反过来当文档 revision 变化时（New/Open/Undo/Redo）再从 kernel 同步回来。

mod input;

use std::sync::Arc;

use eframe::egui;

use crate::app::{EditorShell, ShellOutput};
use crate::core::Command;
use crate::kernel::services::adapters::{
    ClipboardService, KeybindingService, LocalFileProvider, NativeDialogs,
};
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::{AppState, EditPassthrough};

pub use input::key_from_egui;

const TEXT_EDIT_ID: &str = "zpad_text";

pub struct ZpadApp {
    shell: EditorShell<LocalFileProvider, NativeDialogs>,
    keybindings: KeybindingService,
    clipboard: ClipboardService,
    buffer: String,
    synced_revision: u64,
    pending_passthrough: Vec<EditPassthrough>,
    allow_close: bool,
    word_wrap: bool,
    font_size: f32,
}

impl ZpadApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: EditorConfig,
        keybindings: KeybindingService,
    ) -> Self {
        let word_wrap = config.word_wrap;
        let font_size = config.font_size;
        let shell = EditorShell::new(
            AppState::new(config),
            LocalFileProvider::new(),
            NativeDialogs::new(),
        );
        let clipboard = ClipboardService::new();
        if !clipboard.is_available() {
            tracing::warn!("menu paste disabled: no system clipboard");
        }

        Self {
            synced_revision: shell.state().document.revision,
            buffer: shell.state().document.text.clone(),
            shell,
            keybindings,
            clipboard,
            pending_passthrough: Vec::new(),
            allow_close: false,
            word_wrap,
            font_size,
        }
    }

    fn text_edit_id() -> egui::Id {
        egui::Id::new(TEXT_EDIT_ID)
    }

    fn run_command(&mut self, ctx: &egui::Context, command: Command) {
        let output = self.shell.run_command(command);
        self.handle_output(ctx, output);
    }

    fn handle_output(&mut self, ctx: &egui::Context, output: ShellOutput) {
        if let Some(title) = output.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
        // 菜单点击会夺走焦点，透传操作推迟到下一帧、文本框重新获得焦点之后
        if !output.passthrough.is_empty() {
            self.pending_passthrough.extend(output.passthrough);
            ctx.request_repaint();
        }
        if output.quit {
            self.allow_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if output.state_changed {
            self.sync_buffer();
        }
    }

    fn sync_buffer(&mut self) {
        let doc = &self.shell.state().document;
        if doc.revision != self.synced_revision {
            self.buffer.clone_from(&doc.text);
            self.synced_revision = doc.revision;
        }
    }

    /// 消费命中绑定的按键事件，避免文本控件再处理一次（例如它自带的 Ctrl+Z）
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let mut commands = Vec::new();
        ctx.input_mut(|i| {
            i.events.retain(|event| {
                let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                else {
                    return true;
                };
                let Some(command) = key_from_egui(*key, *modifiers)
                    .and_then(|k| self.keybindings.resolve(&k))
                else {
                    return true;
                };
                commands.push(command);
                false
            });
        });

        for command in commands {
            self.run_command(ctx, command);
        }
    }

    fn apply_passthrough(&mut self, ctx: &egui::Context) {
        if self.pending_passthrough.is_empty() {
            return;
        }
        let ops = std::mem::take(&mut self.pending_passthrough);
        ctx.memory_mut(|m| m.request_focus(Self::text_edit_id()));

        let mut events = Vec::with_capacity(ops.len());
        for op in ops {
            match op {
                EditPassthrough::Cut => events.push(egui::Event::Cut),
                EditPassthrough::Copy => events.push(egui::Event::Copy),
                EditPassthrough::Paste => match self.clipboard.get_text() {
                    Ok(text) => events.push(egui::Event::Paste(text)),
                    Err(e) => tracing::warn!(error = %e, "paste failed"),
                },
            }
        }
        ctx.input_mut(|i| i.events.extend(events));
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.allow_close {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        self.run_command(ctx, Command::Quit);
    }

    fn menu_item(&mut self, ui: &mut egui::Ui, label: &str, command: Command, enabled: bool) {
        let mut button = egui::Button::new(label);
        if let Some(accelerator) = self.keybindings.accelerator(command) {
            button = button.shortcut_text(accelerator);
        }
        if ui.add_enabled(enabled, button).clicked() {
            ui.close_menu();
            self.run_command(ui.ctx(), command);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    self.menu_item(ui, "New", Command::NewFile, true);
                    self.menu_item(ui, "Open...", Command::OpenFile, true);
                    self.menu_item(ui, "Save", Command::Save, true);
                    self.menu_item(ui, "Save As...", Command::SaveAs, true);
                    ui.separator();
                    self.menu_item(ui, "Exit", Command::Quit, true);
                });
                ui.menu_button("Edit", |ui| {
                    let history = &self.shell.state().history;
                    let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
                    self.menu_item(ui, "Undo", Command::Undo, can_undo);
                    self.menu_item(ui, "Redo", Command::Redo, can_redo);
                    ui.separator();
                    self.menu_item(ui, "Cut", Command::Cut, true);
                    self.menu_item(ui, "Copy", Command::Copy, true);
                    self.menu_item(ui, "Paste", Command::Paste, true);
                });
            });
        });
    }

    fn text_area(&mut self, ctx: &egui::Context) {
        let font_id = egui::FontId::monospace(self.font_size);
        let word_wrap = self.word_wrap;
        let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let wrap_width = if word_wrap { wrap_width } else { f32::INFINITY };
            let job = egui::text::LayoutJob::simple(
                text.to_owned(),
                font_id.clone(),
                ui.visuals().text_color(),
                wrap_width,
            );
            ui.fonts(|f| f.layout_job(job))
        };

        let changed = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let scroll = if word_wrap {
                    egui::ScrollArea::vertical()
                } else {
                    egui::ScrollArea::both()
                };
                scroll
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let editor = egui::TextEdit::multiline(&mut self.buffer)
                            .id(Self::text_edit_id())
                            .frame(false)
                            .lock_focus(true)
                            .desired_width(f32::INFINITY)
                            .min_size(ui.available_size())
                            .layouter(&mut layouter);
                        ui.add(editor).changed()
                    })
                    .inner
            })
            .inner;

        if changed {
            let output = self.shell.text_edited(self.buffer.clone());
            // 内容与控件一致，只更新 revision
            self.synced_revision = self.shell.state().document.revision;
            self.handle_output(ctx, output);
        }
    }
}

impl eframe::App for ZpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);
        self.handle_shortcuts(ctx);
        self.apply_passthrough(ctx);
        self.menu_bar(ctx);
        self.text_area(ctx);
    }
}
