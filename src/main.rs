use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use term_float::components::{TextPanel, TitleBar};
use term_float::constants::DEFAULT_FPS;
use term_float::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_float::drivers::{InputDriver, OutputDriver};
use term_float::event_loop::{ControlFlow, EventLoop};
use term_float::geometry::{Point, Rectangle, Size};
use term_float::input::{CursorShape, PointerSource};
use term_float::tracing_sub;
use term_float::ui::UiFrame;
use term_float::window::{WindowConfig, WindowHost, WindowId};

const CONTROLS: &str = indoc! {"
    Controls:
      drag the title bar to move a window
      drag near the right or bottom edge to resize it
      n        open a modal popup (click outside it to close)
      Esc      close the topmost popup
      q        quit (Ctrl-Q also works)
"};

#[derive(Parser, Debug)]
#[command(
    name = "term-float",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating, draggable and resizable windows in the terminal",
    after_help = CONTROLS
)]
struct Cli {
    /// Title of the demo window.
    #[arg(long, value_name = "TEXT", default_value = "term-float")]
    title: String,

    /// Height of the title bar in rows.
    #[arg(long, value_name = "ROWS", default_value_t = 1)]
    title_height: u16,

    /// Block input to everything beneath the demo window.
    #[arg(long)]
    modal: bool,

    /// Disable dragging by the title bar.
    #[arg(long)]
    no_drag: bool,

    /// Disable edge resizing.
    #[arg(long)]
    no_resize: bool,

    /// Minimum size, as WIDTHxHEIGHT.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    min: Option<Size>,

    /// Maximum size, as WIDTHxHEIGHT.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    max: Option<Size>,

    /// Close the demo window when a click it captured is released outside it.
    #[arg(long)]
    close_on_click_out: bool,

    /// Initial geometry, as X,Y,WIDTH,HEIGHT.
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect, default_value = "4,2,48,14")]
    at: Rectangle,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Frames per second.
    #[arg(short = 'f', long, value_name = "FPS", default_value_t = DEFAULT_FPS)]
    fps: u32,
}

impl Cli {
    fn window_config(&self) -> Result<WindowConfig, String> {
        if !(1..=240).contains(&self.fps) {
            return Err("fps must be between 1 and 240".to_string());
        }
        let mut config = WindowConfig::new()
            .contents(TextPanel::new(CONTROLS.lines()))
            .title_bar(TitleBar::new(self.title.as_str()), self.title_height)
            .modal(self.modal)
            .draggable(!self.no_drag)
            .resizeable(!self.no_resize)
            .close_on_click_out(self.close_on_click_out)
            .location(self.at)
            .move_handler(|_, moved| tracing::info!(rect = ?moved.rect, "demo window moved"))
            .resize_handler(|_, resized| {
                tracing::info!(rect = ?resized.rect, "demo window resized")
            });
        if let Some(min) = self.min {
            config = config.min_size(min.width, min.height);
        }
        if let Some(max) = self.max {
            config = config.max_size(max.width, max.height);
        }
        Ok(config)
    }
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width = width.trim().parse().map_err(|err| format!("width: {err}"))?;
    let height = height.trim().parse().map_err(|err| format!("height: {err}"))?;
    Ok(Size::new(width, height))
}

fn parse_rect(value: &str) -> Result<Rectangle, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("expected X,Y,W,H: {err}"))?;
    let &[x, y, width, height] = parts.as_slice() else {
        return Err(format!("expected four values, got {}", parts.len()));
    };
    Ok(Rectangle::from_origin_size(
        Point::new(x, y),
        Size::new(width, height),
    ))
}

struct Demo {
    host: WindowHost,
    popups: Vec<WindowId>,
    opened: usize,
    cursor: CursorShape,
}

impl Demo {
    fn new(config: WindowConfig) -> io::Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        let mut host = WindowHost::new();
        let desktop = WindowConfig::new()
            .contents(TextPanel::new(CONTROLS.lines()))
            .location(Rectangle::new(0, 0, i32::from(cols), i32::from(rows)))
            .build()
            .map_err(io::Error::other)?;
        host.add_window(desktop).map_err(io::Error::other)?;
        let window = config.build().map_err(io::Error::other)?;
        host.add_window(window).map_err(io::Error::other)?;
        Ok(Self {
            host,
            popups: Vec::new(),
            opened: 0,
            cursor: CursorShape::Default,
        })
    }

    fn open_popup(&mut self) -> io::Result<()> {
        self.opened += 1;
        let offset = (self.opened % 8) as i32 * 2;
        let popup = WindowConfig::new()
            .contents(TextPanel::new([
                format!("Popup #{}", self.opened),
                "Click outside to dismiss.".to_string(),
            ]))
            .title_bar(TitleBar::new("popup"), 1)
            .modal(true)
            .draggable(true)
            .resizeable(true)
            .min_size(20, 5)
            .max_size(60, 20)
            .close_on_click_out(true)
            .location(Rectangle::from_origin_size(
                Point::new(20 + offset, 6 + offset),
                Size::new(30, 7),
            ))
            .build()
            .map_err(io::Error::other)?;
        let id = self.host.add_window(popup).map_err(io::Error::other)?;
        self.popups.push(id);
        Ok(())
    }

    fn close_top_popup(&mut self) {
        self.popups.retain(|id| self.host.window(*id).is_some());
        if let Some(id) = self.popups.pop() {
            self.host.close_window(id);
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.host.render(frame, &mut self.cursor);
        let area = frame.area();
        if area.height == 0 {
            return;
        }
        let status = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let pointer = self.host.pointer().cursor_position();
        let text = format!(
            " {} pointer {},{}  windows {}  n: popup  q: quit",
            self.cursor.symbol(),
            pointer.x,
            pointer.y,
            self.host.len(),
        );
        frame.render_widget(
            Paragraph::new(text).style(Style::default().bg(Color::Black).fg(Color::Gray)),
            status,
        );
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .window_config()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    tracing_sub::init_default(cli.log_file.as_deref())?;

    let mut demo = Demo::new(config)?;
    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let interval = EventLoop::<ConsoleInputDriver>::interval_for_fps(cli.fps);
    let mut event_loop = EventLoop::new(input, interval);
    let result = event_loop.run(|_, event| {
        let Some(event) = event else {
            output.draw(|mut frame| demo.render(&mut frame))?;
            return Ok(ControlFlow::Continue);
        };
        if let Event::Key(key) = &event
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(ControlFlow::Quit),
                KeyCode::Char('Q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(ControlFlow::Quit);
                }
                KeyCode::Char('n') => {
                    demo.open_popup()?;
                    return Ok(ControlFlow::Continue);
                }
                KeyCode::Esc => {
                    demo.close_top_popup();
                    return Ok(ControlFlow::Continue);
                }
                _ => {}
            }
        }
        demo.host.handle_event(&event);
        Ok(ControlFlow::Continue)
    });

    event_loop.driver().set_mouse_capture(false)?;
    output.exit()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes_and_rects() {
        assert_eq!(parse_size("20x5"), Ok(Size::new(20, 5)));
        assert_eq!(parse_size("7X3"), Ok(Size::new(7, 3)));
        assert!(parse_size("20").is_err());
        assert_eq!(
            parse_rect("1, 2, 30, 40"),
            Ok(Rectangle::new(1, 2, 31, 42))
        );
        assert!(parse_rect("1,2,3").is_err());
        let huge = parse_rect("10,10,2147483647,5").unwrap();
        assert_eq!(huge.max(), Point::new(i32::MAX, 15));
    }

    #[test]
    fn cli_maps_to_window_config() {
        let cli = Cli::parse_from([
            "term-float",
            "--modal",
            "--no-drag",
            "--min",
            "10x4",
            "--at",
            "0,0,5,2",
        ]);
        let window = cli.window_config().unwrap().build().unwrap();
        assert!(window.is_modal());
        assert!(!window.is_draggable());
        assert!(window.is_resizeable());
        assert_eq!(window.rect(), Rectangle::new(0, 0, 10, 4));
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        let cli = Cli::parse_from(["term-float", "--fps", "0"]);
        assert!(cli.window_config().is_err());
    }
}
