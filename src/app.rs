use std::time::Instant;

use crate::browser::menu::Direction;
use crate::browser::{Activation, Back, Browser, MenuOutcome, Press};
use crate::error::Result;
use crate::loader::CommandLoader;
use crate::storage::LocalStorage;

/// The browser as wired up by the binary.
pub type ArchiveBrowser = Browser<LocalStorage, CommandLoader>;

/// Application mode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Normal,
    /// Text input for a pending rename.
    Rename,
}

/// State for the rename dialog's text input.
#[derive(Debug, Default)]
pub struct DialogState {
    pub input: String,
    pub cursor_position: usize,
}

/// Main application state.
pub struct App {
    pub browser: ArchiveBrowser,
    pub should_quit: bool,
    pub mode: AppMode,
    pub dialog_state: DialogState,
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(browser: ArchiveBrowser) -> Self {
        Self {
            browser,
            should_quit: false,
            mode: AppMode::Normal,
            dialog_state: DialogState::default(),
            status_message: None,
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message with current timestamp.
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear the status message if it has been displayed for more than 3 seconds.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, ref created)) = self.status_message {
            if created.elapsed().as_secs() > 3 {
                self.status_message = None;
            }
        }
    }

    // ── Browsing ────────────────────────────────────────────────────────────

    /// Up/down: moves the menu highlight while the menu is open, the list
    /// cursor otherwise.
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.browser.menu().is_open() {
            self.browser.menu_move(direction);
        } else {
            match direction {
                Direction::Up => self.browser.select_previous(),
                Direction::Down => self.browser.select_next(),
            }
        }
    }

    pub fn previous_tab(&mut self) {
        if !self.browser.menu().is_open() {
            self.browser.previous_tab();
        }
    }

    pub fn next_tab(&mut self) {
        if !self.browser.menu().is_open() {
            self.browser.next_tab();
        }
    }

    /// OK press: confirms the highlighted menu item, or activates the entry.
    pub fn confirm(&mut self, press: Press) {
        if self.browser.menu().is_open() {
            if press == Press::Short {
                let result = self.browser.menu_confirm();
                self.apply_menu_result(result);
            }
            return;
        }
        let activation = self.browser.activate(press);
        if activation == Activation::Ignored && self.browser.listing().is_empty() {
            self.set_status_message("Empty".to_string());
        }
    }

    /// Back press: closes the menu, leaves a directory, or quits at the root.
    pub fn back(&mut self) {
        if self.browser.menu().is_open() {
            self.browser.close_menu();
            return;
        }
        if self.browser.back() == Back::Exit {
            self.quit();
        }
    }

    fn apply_menu_result(&mut self, result: Result<MenuOutcome>) {
        match result {
            Ok(MenuOutcome::Launched { app }) => {
                let name = self.browser.selected_name().to_string();
                self.set_status_message(format!("Started {}: {}", app, name));
            }
            Ok(MenuOutcome::Pinned) => self.set_status_message("Pinned".to_string()),
            Ok(MenuOutcome::Unpinned) => self.set_status_message("Unpinned".to_string()),
            Ok(MenuOutcome::Deleted) => self.set_status_message("Deleted".to_string()),
            Ok(MenuOutcome::Renamed) => self.set_status_message("Renamed".to_string()),
            Ok(MenuOutcome::RenameRequested { prefill }) => self.open_rename(prefill),
            Ok(MenuOutcome::NotApplicable) | Ok(MenuOutcome::Closed) => {}
            Err(e) => {
                log::warn!("file menu action failed: {}", e);
                self.set_status_message(format!("⚠ {}", e));
            }
        }
    }

    // ── Rename dialog ───────────────────────────────────────────────────────

    fn open_rename(&mut self, prefill: String) {
        let max = self.browser.limits().max_name_len;
        let mut input = prefill;
        while input.len() > max {
            input.pop();
        }
        self.dialog_state = DialogState {
            cursor_position: input.len(),
            input,
        };
        self.mode = AppMode::Rename;
    }

    /// Complete the rename with the current input.
    pub fn submit_rename(&mut self) {
        let input = std::mem::take(&mut self.dialog_state.input);
        self.close_dialog();
        let result = self.browser.finish_rename(&input);
        self.apply_menu_result(result);
    }

    /// Dismiss the rename dialog without renaming.
    pub fn cancel_rename(&mut self) {
        self.close_dialog();
        self.browser.cancel_rename();
    }

    fn close_dialog(&mut self) {
        self.mode = AppMode::Normal;
        self.dialog_state = DialogState::default();
    }

    /// Insert a character at the current cursor position. Input is capped at
    /// the configured name length.
    pub fn dialog_input_char(&mut self, c: char) {
        let max = self.browser.limits().max_name_len;
        if c == '/' || self.dialog_state.input.len() + c.len_utf8() > max {
            return;
        }
        self.dialog_state
            .input
            .insert(self.dialog_state.cursor_position, c);
        self.dialog_state.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn dialog_delete_char(&mut self) {
        let pos = self.dialog_state.cursor_position;
        if let Some(prev_char) = self.dialog_state.input[..pos].chars().next_back() {
            self.dialog_state.cursor_position -= prev_char.len_utf8();
            self.dialog_state
                .input
                .remove(self.dialog_state.cursor_position);
        }
    }

    /// Move cursor left by one character.
    pub fn dialog_move_cursor_left(&mut self) {
        let pos = self.dialog_state.cursor_position;
        if let Some(prev_char) = self.dialog_state.input[..pos].chars().next_back() {
            self.dialog_state.cursor_position -= prev_char.len_utf8();
        }
    }

    /// Move cursor right by one character.
    pub fn dialog_move_cursor_right(&mut self) {
        let pos = self.dialog_state.cursor_position;
        if let Some(next_char) = self.dialog_state.input[pos..].chars().next() {
            self.dialog_state.cursor_position += next_char.len_utf8();
        }
    }

    /// Move cursor to the beginning of the input.
    pub fn dialog_cursor_home(&mut self) {
        self.dialog_state.cursor_position = 0;
    }

    /// Move cursor to the end of the input.
    pub fn dialog_cursor_end(&mut self) {
        self.dialog_state.cursor_position = self.dialog_state.input.len();
    }
}
