// SPDX-License-Identifier: GPL-3.0-only

//! Terminal camera front-end
//!
//! Renders the controller state to the terminal. Camera frames and the
//! reviewed photo are drawn with Unicode half-block characters for improved
//! vertical resolution. Notices are modal: any key dismisses them.

use crate::app::{CaptureController, Message, Notice, NoticeKind, Outcome, ViewState};
use crate::backends::media_library::FilesystemLibrary;
use crate::backends::permissions::DesktopPermissions;
use crate::backends::virtual_camera::VirtualCamera;
use crate::config::{self, Config};
use crate::constants;
use crate::fl;
use crate::flash::TorchDevice;
use crate::storage;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use image::RgbImage;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use std::io::{self, stdout};
use tracing::{info, warn};

/// Width in pixels of preview frames requested from the camera
const PREVIEW_FRAME_WIDTH: u32 = 160;

type TerminalController = CaptureController<VirtualCamera, FilesystemLibrary, DesktopPermissions>;

/// Build a controller on the virtual camera from the user config
pub fn build_controller(config: &Config) -> TerminalController {
    let (width, height) = config.sensor_resolution();
    let torch_devices = if config.hardware_torch {
        TorchDevice::discover()
    } else {
        Vec::new()
    };

    let camera = VirtualCamera::new(config.capture_directory(), width, height)
        .with_mirror_front(config.mirror_front_preview)
        .with_torch_devices(torch_devices);
    let library = FilesystemLibrary::new(config.library_directory());
    let platform = DesktopPermissions::new(config::permissions_path(), config.library_directory());

    CaptureController::new(camera, library, platform)
}

/// Run the terminal camera
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let mut controller = build_controller(config);
    let sensor = config.sensor_resolution();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &runtime, &mut controller, sensor);
    controller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &tokio::runtime::Runtime,
    controller: &mut TerminalController,
    sensor: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    // Show the loading screen while permissions resolve
    terminal.draw(|f| draw(f, controller, &FrameWidget::new()))?;
    runtime.block_on(controller.update(Message::Initialize));

    let preview_height = (PREVIEW_FRAME_WIDTH * sensor.1 / sensor.0.max(1)).max(1);
    let mut review = ReviewImage::default();

    loop {
        let frame = if controller.view().is_preview() {
            controller
                .camera_mut()
                .preview_frame(PREVIEW_FRAME_WIDTH, preview_height)
        } else if let Some(photo) = controller.photo() {
            review.load(&photo.uri).cloned()
        } else {
            None
        };
        let frame_widget = FrameWidget { frame };

        terminal.draw(|f| draw(f, controller, &frame_widget))?;

        // Handle input with timeout for frame updates
        if !event::poll(constants::terminal::FRAME_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if controller.notice().is_some() {
            controller.dismiss_notice();
            continue;
        }

        if is_quit(&key) {
            break;
        }

        let Some(message) = message_for_key(controller.view(), key.code) else {
            continue;
        };
        match runtime.block_on(controller.update(message)) {
            Outcome::Failed(e) => warn!(?message, error = %e, "Action failed"),
            Outcome::Applied => info!(?message, "Action applied"),
            Outcome::Ignored => {}
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Key bindings per screen
pub fn message_for_key(view: &ViewState, code: KeyCode) -> Option<Message> {
    match (view, code) {
        (ViewState::PermissionDenied, KeyCode::Char('a') | KeyCode::Enter) => {
            Some(Message::RequestCameraPermission)
        }
        (ViewState::Preview, KeyCode::Char(' ') | KeyCode::Enter) => Some(Message::Capture),
        (ViewState::Preview, KeyCode::Char('f')) => Some(Message::ToggleFlash),
        (ViewState::Preview, KeyCode::Char('s')) => Some(Message::ToggleFacing),
        (ViewState::Review { .. }, KeyCode::Char('r')) => Some(Message::Retake),
        (ViewState::Review { .. }, KeyCode::Char('w')) => Some(Message::Save),
        _ => None,
    }
}

fn draw(f: &mut Frame, controller: &TerminalController, frame_widget: &FrameWidget) {
    let area = f.area();

    // Reserve bottom line for status
    let main_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };

    let hint = match controller.view() {
        ViewState::Loading => {
            f.render_widget(centered_text(vec![Line::from(fl!("loading"))]), main_area);
            String::new()
        }
        ViewState::PermissionDenied => {
            let lines = vec![
                Line::from(fl!("permission-required")),
                Line::from(""),
                Line::from(format!("[ {} ]", fl!("permission-allow")))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ];
            f.render_widget(centered_text(lines), main_area);
            fl!("hint-permission")
        }
        ViewState::Preview => {
            f.render_widget(frame_widget, main_area);
            let config = controller.config();
            let mut top = format!(
                " {} {} | {}",
                config.flash.label(),
                config.flash.as_upper(),
                config.facing.label()
            );
            if controller.torch() {
                top.push_str(&format!(" | {}", fl!("torch-active")));
            }
            f.render_widget(
                StatusBar {
                    message: &top,
                    background: Color::Black,
                },
                Rect { height: 1.min(main_area.height), ..main_area },
            );
            fl!("hint-preview")
        }
        ViewState::Review { .. } => {
            f.render_widget(frame_widget, main_area);
            let actions = format!(" [ {} ]  [ {} ]", fl!("retake"), fl!("save"));
            f.render_widget(
                StatusBar {
                    message: &actions,
                    background: Color::Black,
                },
                Rect { height: 1.min(main_area.height), ..main_area },
            );
            fl!("hint-review")
        }
    };

    let status = if hint.is_empty() {
        fl!("app-title")
    } else {
        hint
    };
    f.render_widget(
        StatusBar {
            message: &status,
            background: Color::DarkGray,
        },
        status_area,
    );

    if let Some(notice) = controller.notice() {
        draw_notice(f, notice, main_area);
    }
}

fn centered_text(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn draw_notice(f: &mut Frame, notice: &Notice, area: Rect) {
    let width = area.width.min(50);
    let height = area.height.min(7);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let color = match notice.kind {
        NoticeKind::Confirmation => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let body = vec![
        Line::from(notice.body.clone()),
        Line::from(""),
        Line::from(fl!("hint-notice")).style(Style::default().fg(Color::Gray)),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        centered_text(body).block(
            Block::bordered()
                .title(notice.title.clone())
                .border_style(Style::default().fg(color)),
        ),
        popup,
    );
}

/// Decoded photo under review, cached by uri
#[derive(Default)]
struct ReviewImage {
    uri: String,
    image: Option<RgbImage>,
}

impl ReviewImage {
    fn load(&mut self, uri: &str) -> Option<&RgbImage> {
        if self.uri != uri {
            self.uri = uri.to_string();
            self.image = storage::uri_to_path(uri).and_then(|path| match image::open(&path) {
                Ok(img) => Some(img.to_rgb8()),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot decode photo for review");
                    None
                }
            });
        }
        self.image.as_ref()
    }
}

/// Widget that renders an image using half-block characters
struct FrameWidget {
    frame: Option<RgbImage>,
}

impl FrameWidget {
    fn new() -> Self {
        Self { frame: None }
    }
}

impl Widget for &FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(frame) = &self.frame else {
            // No frame yet - show placeholder
            let msg = fl!("waiting-for-camera");
            let x = area.x + (area.width.saturating_sub(msg.chars().count() as u16)) / 2;
            let y = area.y + area.height / 2;
            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, msg, Style::default());
            }
            return;
        };

        if area.width == 0 || area.height == 0 {
            return;
        }

        // Each terminal cell displays 2 vertical pixels using half-block characters
        let frame_aspect = frame.width() as f64 / frame.height().max(1) as f64;
        let term_width = area.width as f64;
        let term_height = (area.height * 2) as f64;

        let (display_width, display_height) = if term_width / term_height > frame_aspect {
            // Terminal is wider - fit to height
            let h = term_height;
            let w = h * frame_aspect;
            (w as u16, (h / 2.0) as u16)
        } else {
            // Terminal is taller - fit to width
            let w = term_width;
            let h = w / frame_aspect;
            (w as u16, (h / 2.0) as u16)
        };
        if display_width == 0 || display_height == 0 {
            return;
        }

        // Center the image
        let x_offset = area.x + (area.width.saturating_sub(display_width)) / 2;
        let y_offset = area.y + (area.height.saturating_sub(display_height)) / 2;

        let x_scale = frame.width() as f64 / display_width as f64;
        let y_scale = frame.height() as f64 / (display_height * 2) as f64;

        for ty in 0..display_height {
            for tx in 0..display_width {
                let term_x = x_offset + tx;
                let term_y = y_offset + ty;

                if term_x >= area.x + area.width || term_y >= area.y + area.height {
                    continue;
                }

                let src_x = (tx as f64 * x_scale) as u32;
                let src_y_top = (ty as f64 * 2.0 * y_scale) as u32;
                let src_y_bottom = ((ty as f64 * 2.0 + 1.0) * y_scale) as u32;

                if let Some(cell) = buf.cell_mut((term_x, term_y)) {
                    cell.set_char('▀');
                    cell.set_fg(sample_pixel(frame, src_x, src_y_top));
                    cell.set_bg(sample_pixel(frame, src_x, src_y_bottom));
                }
            }
        }
    }
}

fn sample_pixel(frame: &RgbImage, x: u32, y: u32) -> Color {
    let x = x.min(frame.width() - 1);
    let y = y.min(frame.height() - 1);
    let [r, g, b] = frame.get_pixel(x, y).0;
    Color::Rgb(r, g, b)
}

/// Single-line bar widget
struct StatusBar<'a> {
    message: &'a str,
    background: Color,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(self.background);
            }
        }

        // Truncate on a char boundary
        let text: String = self.message.chars().take(area.width as usize).collect();

        buf.set_string(
            area.x,
            area.y,
            text,
            Style::default().fg(Color::White).bg(self.background),
        );
    }
}
