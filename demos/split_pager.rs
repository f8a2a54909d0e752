//! Split pager demo: nested splits with independently scrolling labels.
//!
//! A vertical split reserves a quarter of the screen on the right; the
//! left side is split horizontally with a five-row instruction bar at
//! the bottom. Labels are placed as shared handles so the event loop
//! can keep scrolling them after the tree takes ownership.
//!
//! Keys: Up/Down scroll the left pane, +/- page the right pane,
//! q or Esc to quit.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, terminal};

use sash::{Buffer, Label, Rgb, Split, Window};

fn long_text() -> String {
    let mut text = String::new();
    for chapter in 1..=40 {
        writeln!(
            text,
            "Chapter {chapter}. The quick brown fox jumped over the lazy dog \
             so many times that the dog filed a complaint with the fence."
        )
        .unwrap();
    }
    text
}

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

    // Five rows off the bottom, a quarter of the width off the right:
    // the legacy float encodings -5.0 and -0.25 still decode.
    let mut left = Split::horizontal(-5.0);
    let mut root = Split::vertical(-0.25);

    let pager = Rc::new(RefCell::new(Label::new()));
    write!(pager.borrow_mut(), "{}", long_text()).unwrap();
    left.place(Box::new(Rc::clone(&pager))).unwrap();

    let mut instructions = Label::new().with_fg(Rgb::new(100, 200, 100));
    write!(
        instructions,
        "Use Up/Down arrow keys and +/- keys to scroll!"
    )
    .unwrap();
    left.place(Box::new(instructions)).unwrap();

    let side = Rc::new(RefCell::new(Label::new()));
    write!(side.borrow_mut(), "{}", long_text()).unwrap();

    root.place(Box::new(left)).unwrap();
    root.place(Box::new(Rc::clone(&side))).unwrap();
    root.resize(width.max(1), height.max(1));

    loop {
        grid.clear();
        root.draw(&mut grid);
        sash::terminal::present(&grid, stdout)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => {
                    let _ = pager.borrow_mut().scroll(-3);
                }
                KeyCode::Down => {
                    let _ = pager.borrow_mut().scroll(3);
                }
                KeyCode::Char('+') => {
                    let _ = side.borrow_mut().next_page();
                }
                KeyCode::Char('-') => {
                    let _ = side.borrow_mut().prev_page();
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            Event::Resize(new_width, new_height) => {
                grid.resize(new_width.max(1), new_height.max(1));
                root.resize(new_width.max(1), new_height.max(1));
            }
            _ => {}
        }
    }

    Ok(())
}
