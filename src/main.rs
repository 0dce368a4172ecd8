//! fakeinput demo: two emulated text inputs in a terminal.
//!
//! Tab / Shift+Tab 切换焦点，Enter 校验，Esc 退出；鼠标点击定位光标。

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use fakeinput::core::{InputEvent, KeyCode, KeyEvent};
use fakeinput::kernel::services::adapters::{get_options_path, load_options, StaticStyleSource};
use fakeinput::kernel::services::ports::{ElementSnapshot, FakeInputOptions};
use fakeinput::kernel::{BoxGeometry, FakeInputHost, InputId};
use fakeinput::metrics::MonospaceMetrics;
use fakeinput::tui::crossterm::{into_input_events, into_pointer_action, pointer_in, PointerAction};
use fakeinput::tui::terminal_guard::TerminalGuard;
use fakeinput::tui::view::{cursor_position, inner_area, FakeInputView};

mod logging;

const FIELD_HEIGHT: u16 = 3;
const STATUS_LINES: usize = 4;

struct Field {
    id: InputId,
    title: &'static str,
    area: Rect,
    invalid: bool,
}

struct Demo {
    host: FakeInputHost,
    fields: Vec<Field>,
    status: Rc<RefCell<VecDeque<String>>>,
    warnings: Option<Receiver<String>>,
}

impl Demo {
    fn new(options: FakeInputOptions, warnings: Option<Receiver<String>>) -> Self {
        let mut host = FakeInputHost::new(MonospaceMetrics::cells())
            .with_style_source(StaticStyleSource::from_css_text(
                "font-family: monospace; font-size: 1px",
            ))
            .with_defaults(options);

        let status = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&status);
        host.subscribe(move |n| {
            push_status(&sink, format!("{} on #{}", n.kind.name(), n.target.0));
        });

        let elements = [
            (
                "name",
                ElementSnapshot::text_input(1)
                    .with_attr("placeholder", "Your name")
                    .with_attr("maxlength", "32")
                    .with_attr("required", ""),
            ),
            (
                "zip",
                ElementSnapshot::text_input(2)
                    .with_attr("placeholder", "12345")
                    .with_attr("pattern", "[0-9]{5}"),
            ),
        ];
        let mut fields = Vec::new();
        for (title, element) in elements {
            if let Some(id) = host.attach(element) {
                fields.push(Field {
                    id,
                    title,
                    area: Rect::default(),
                    invalid: false,
                });
            }
        }

        Self {
            host,
            fields,
            status,
            warnings,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        for (field, area) in self.fields.iter_mut().zip(chunks.iter()) {
            field.area = *area;
            let inner = inner_area(*area);
            self.host.set_box(
                field.id,
                BoxGeometry::new(f32::from(inner.width), f32::from(inner.height)),
            );
        }

        for field in &self.fields {
            let Some(state) = self.host.render(field.id) else {
                continue;
            };
            let focused = self.host.focused() == Some(field.id);
            frame.render_widget(
                FakeInputView::new(&state, field.title)
                    .focused(focused)
                    .invalid(field.invalid),
                field.area,
            );
            if focused {
                if let Some(pos) = cursor_position(&state, inner_area(field.area)) {
                    frame.set_cursor_position(pos);
                }
            }
        }

        if let Some(rx) = &self.warnings {
            for line in rx.try_iter() {
                push_status(&self.status, line);
            }
        }
        let lines: Vec<Line> = self
            .status
            .borrow()
            .iter()
            .map(|s| Line::raw(s.clone()))
            .collect();
        if let Some(area) = chunks.last() {
            frame.render_widget(Paragraph::new(lines), *area);
        }
    }

    /// Returns false when the demo should quit.
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => {}
            Event::Key(key) => {
                let converted = fakeinput::tui::crossterm::into_key_event(key);
                match converted.code {
                    KeyCode::Esc => return false,
                    KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(converted),
                    KeyCode::Enter => self.validate_all(),
                    _ => {
                        if let Some(id) = self.host.focused() {
                            for input in into_input_events(key) {
                                self.host.dispatch(id, input);
                            }
                        }
                    }
                }
            }
            Event::Mouse(mouse) => match into_pointer_action(mouse) {
                Some(PointerAction::Down { column, row }) => self.pointer_down(column, row),
                Some(PointerAction::Up { .. }) => {
                    if let Some(id) = self.host.focused() {
                        self.host.dispatch(id, InputEvent::PointerUp(None));
                    }
                }
                None => {}
            },
            _ => {}
        }
        true
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        let hit = self.fields.iter().find_map(|field| {
            pointer_in(inner_area(field.area), column, row).map(|pointer| (field.id, pointer))
        });
        match hit {
            Some((id, pointer)) => {
                self.host.dispatch(id, InputEvent::PointerDown(pointer));
            }
            None => {
                self.host.pointer_down_outside();
            }
        }
    }

    fn cycle_focus(&mut self, key: KeyEvent) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        let current = self
            .host
            .focused()
            .and_then(|id| self.fields.iter().position(|f| f.id == id));
        let next = match (current, key.code) {
            (None, _) => 0,
            (Some(i), KeyCode::BackTab) => (i + len - 1) % len,
            (Some(i), _) => (i + 1) % len,
        };
        self.host.focus(self.fields[next].id);
    }

    fn validate_all(&mut self) {
        for field in &mut self.fields {
            field.invalid = !self.host.check_validity(field.id);
            if field.invalid {
                let message = self.host.validation_message(field.id);
                push_status(&self.status, format!("{}: {}", field.title, message));
            }
        }
    }
}

fn push_status(status: &RefCell<VecDeque<String>>, line: String) {
    let mut status = status.borrow_mut();
    status.push_back(line);
    while status.len() > STATUS_LINES {
        status.pop_front();
    }
}

fn main() -> io::Result<()> {
    let mut logging_guard = logging::init();
    let warnings = logging_guard.as_mut().and_then(|g| g.take_warnings());

    let options = match get_options_path() {
        Some(path) => load_options(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load options");
            FakeInputOptions::default()
        }),
        None => FakeInputOptions::default(),
    };

    let mut demo = Demo::new(options, warnings);

    let guard = TerminalGuard::new()?;
    guard.restore_on_panic();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        terminal.draw(|frame| demo.render(frame))?;
        if !demo.handle(event::read()?) {
            break;
        }
    }

    drop(guard);
    if let Some(guard) = &logging_guard {
        tracing::info!(log_dir = %guard.log_dir().display(), "demo finished");
    }
    Ok(())
}
