use crate::{Coords, TermInt};
use std::{io::{stdout, Stdout, Write}, time::Duration};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self, size: Coords) {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetSize(size.0, size.1))
            .expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, style::ResetColor, LeaveAlternateScreen)
            .expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
            .expect("Error clearing.");
    }

    /// Queue a filled rectangle of background-colored blanks with its top-left
    /// corner at `pos`. Nothing is shown until the next flush.
    pub fn fill_rect(&mut self, pos: Coords, width: TermInt, height: TermInt, color: Color) {
        let row = " ".repeat(width as usize);

        for dy in 0..height {
            queue!(
                self.stdout,
                cursor::MoveTo(pos.0, pos.1 + dy),
                style::SetBackgroundColor(color),
                style::Print(&row)
            )
            .expect("Error drawing.");
        }
    }

    pub fn draw_border(&mut self, pos: Coords, width: TermInt, height: TermInt) {
        let end_x = pos.0 + width - 1;
        let end_y = pos.1 + height - 1;

        queue!(self.stdout, style::ResetColor).expect("Error drawing.");

        for x in pos.0..=end_x {
            let ch = if x == pos.0 || x == end_x {'+'} else {'-'};
            self.print_at((x, pos.1), ch);
            self.print_at((x, end_y), ch);
        }

        for y in pos.1 + 1..end_y {
            self.print_at((pos.0, y), '|');
            self.print_at((end_x, y), '|');
        }

        self.flush();
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
