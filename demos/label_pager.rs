//! Label pager demo: a bordered label with scroll and page keys.
//!
//! Keys: Up/Down scroll, PageUp/PageDown page, q or Esc to quit.

use std::fmt::Write as _;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, terminal};

use sash::{Buffer, Label, Rect, Window};

const TEXT: &str = "Test Message! AB testing fox jumped over the fence! \
    The label wraps every content line against its interior width, \
    hyphenating anything-longer-than-one-line-without-a-single-space \
    and keeping a scroll cursor into the wrapped buffer. Resize the \
    terminal and the text reflows on the next draw.";

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut grid = Buffer::new(width.max(1), height.max(1));

    let mut label = Label::new()
        .with_rect(Rect::new(3, 2, 30, 12))
        .with_borders(true);
    write!(label, "{TEXT}").unwrap();
    writeln!(label, "Moar messages! with moar line wrapping!").unwrap();

    loop {
        grid.clear();
        label.draw(&mut grid);
        sash::terminal::present(&grid, stdout)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => {
                    let _ = label.scroll(-1);
                }
                KeyCode::Down => {
                    let _ = label.scroll(1);
                }
                KeyCode::PageUp => {
                    let _ = label.prev_page();
                }
                KeyCode::PageDown => {
                    let _ = label.next_page();
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            Event::Resize(new_width, new_height) => {
                grid.resize(new_width.max(1), new_height.max(1));
            }
            _ => {}
        }
    }

    Ok(())
}
