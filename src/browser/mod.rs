//! Navigation and list-management engine of the archive browser.
//!
//! [`Browser`] owns the whole browser state. Every operation runs to
//! completion synchronously and leaves the state consistent: depth within
//! `[0, MAX_DEPTH]`, a valid selection and a (possibly empty) listing.

pub mod favorites;
pub mod kind;
pub mod lister;
pub mod menu;
pub mod navigation;
pub mod tabs;
pub mod viewport;

use crate::error::Result;
use crate::loader::Loader;
use crate::storage::{self, Storage};

use favorites::{Favorites, RemoveScope};
use kind::trim_known_ext;
use lister::{FileEntry, ListLimits, Listing};
use menu::{Direction, MenuItem, MenuState};
use navigation::NavStack;
use tabs::{Tab, FAVORITES_PATH};

/// Press length of the confirm command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Short,
    Long,
}

/// What a confirm press over the list did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    EnteredDir,
    MenuOpened,
    Ignored,
}

/// What a back command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    LeftDir,
    /// Already at the tab root: the caller should close the browser.
    Exit,
}

/// Result of confirming a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Launched { app: &'static str },
    Pinned,
    Unpinned,
    /// Hand over to text input, pre-filled with the name minus extension.
    /// Completion comes back through [`Browser::finish_rename`].
    RenameRequested { prefill: String },
    Renamed,
    Deleted,
    /// The item does not apply to the selected entry; nothing happened.
    NotApplicable,
    Closed,
}

/// The archive browser.
pub struct Browser<S, L> {
    storage: S,
    loader: L,
    limits: ListLimits,
    tab: Tab,
    nav: NavStack,
    listing: Listing,
    selected_name: String,
    menu: MenuState,
    rename_target: Option<FileEntry>,
}

impl<S: Storage, L: Loader> Browser<S, L> {
    /// Open the browser on `tab`.
    pub fn new(storage: S, loader: L, limits: ListLimits, tab: Tab) -> Self {
        let mut browser = Self {
            storage,
            loader,
            limits,
            tab,
            nav: NavStack::new(tab.root()),
            listing: Listing::default(),
            selected_name: String::new(),
            menu: MenuState::Closed,
            rename_target: None,
        };
        browser.select_tab(tab);
        browser
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn path(&self) -> &str {
        self.nav.path()
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.nav.depth()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn selected_name(&self) -> &str {
        &self.selected_name
    }

    pub fn limits(&self) -> ListLimits {
        self.limits
    }

    /// Selection remembered for `depth`.
    #[cfg(test)]
    pub fn remembered(&self, depth: usize) -> usize {
        self.nav.remembered(depth)
    }

    fn favorites(&self) -> Favorites<'_> {
        Favorites::new(&self.storage, FAVORITES_PATH)
    }

    /// Favorite status of `entry`, probed now.
    pub fn is_favorite(&self, entry: &FileEntry) -> bool {
        self.favorites().is_favorite(&entry.name)
    }

    // ── Tabs ────────────────────────────────────────────────────────────────

    /// Switch to `tab`: back to its root at depth 0 with the first entry
    /// selected.
    pub fn select_tab(&mut self, tab: Tab) {
        self.menu.close();
        self.rename_target = None;
        self.tab = tab;
        self.nav.reset(tab.root());
        self.listing.selected_index = 0;
        let root = tab.root();
        self.switch_dir(root);
    }

    /// Move one tab left. No-op on the first tab.
    pub fn previous_tab(&mut self) -> bool {
        match self.tab.previous() {
            Some(tab) => {
                self.select_tab(tab);
                true
            }
            None => false,
        }
    }

    /// Move one tab right. No-op on the last tab.
    pub fn next_tab(&mut self) -> bool {
        match self.tab.next() {
            Some(tab) => {
                self.select_tab(tab);
                true
            }
            None => false,
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    /// Replace the listing with a fresh scan of the current path. A failed
    /// scan shows up as an empty directory.
    fn rescan(&mut self) {
        let path = self.nav.path();
        self.listing = match lister::list(&self.storage, path, self.tab.filter(), self.limits) {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("{}", e);
                Listing::default()
            }
        };
    }

    /// Rescan but keep the cursor where it was, clamped into the new listing.
    fn rescan_keep_selection(&mut self) {
        let selected = self.listing.selected_index;
        let offset = self.listing.scroll_offset;
        self.rescan();
        self.listing.selected_index = selected;
        self.listing.clamp_selection();
        self.listing.scroll_offset = offset;
        self.reposition();
    }

    fn reposition(&mut self) {
        self.listing.scroll_offset = viewport::reposition(
            self.listing.selected_index,
            self.listing.len(),
            self.listing.scroll_offset,
        );
    }

    /// Show `path` without touching depth or the remembered selections.
    pub fn switch_dir(&mut self, path: &str) {
        self.nav.set_path(path);
        self.rescan_keep_selection();
    }

    /// Descend into the directory `name` of the current listing.
    pub fn enter_dir(&mut self, name: &str) {
        let remembered = self.listing.clamp_index(self.listing.selected_index);
        self.nav.push(name, remembered);
        log::debug!("enter {} (depth {})", self.nav.path(), self.nav.depth());
        self.listing.selected_index = 0;
        let path = self.nav.path().to_string();
        self.switch_dir(&path);
    }

    /// Ascend one level, restoring the selection remembered for it.
    /// Returns `false` at depth 0, where leaving means closing the browser.
    pub fn leave_dir(&mut self) -> bool {
        let Some(restored) = self.nav.pop() else {
            return false;
        };
        log::debug!("leave to {} (depth {})", self.nav.path(), self.nav.depth());
        self.rescan();
        let selected = self.listing.clamp_index(restored);
        self.listing.selected_index = selected;
        self.listing.scroll_offset = viewport::leave_dir_offset(selected, self.listing.len());
        self.reposition();
        true
    }

    /// Back command: leave the directory, or ask to exit at the tab root.
    pub fn back(&mut self) -> Back {
        if self.leave_dir() {
            Back::LeftDir
        } else {
            Back::Exit
        }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.listing.len();
        if len == 0 {
            return;
        }
        self.listing.selected_index = (self.listing.selected_index + 1) % len;
        self.reposition();
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.listing.len();
        if len == 0 {
            return;
        }
        self.listing.selected_index = (self.listing.selected_index + len - 1) % len;
        self.reposition();
    }

    /// Confirm press over the list: a short press enters folders and opens
    /// the menu on files, a long press opens the menu on folders.
    pub fn activate(&mut self, press: Press) -> Activation {
        let Some(entry) = self.listing.selected().cloned() else {
            return Activation::Ignored;
        };
        self.selected_name = entry.name.clone();

        match (entry.kind.is_folder(), press) {
            (true, Press::Short) => {
                self.enter_dir(&entry.name);
                Activation::EnteredDir
            }
            (true, Press::Long) | (false, Press::Short) => {
                if self.open_menu() {
                    Activation::MenuOpened
                } else {
                    Activation::Ignored
                }
            }
            (false, Press::Long) => Activation::Ignored,
        }
    }

    // ── File menu ───────────────────────────────────────────────────────────

    /// Open the menu over the selected entry. Returns `false` if the menu is
    /// already open or there is nothing selected.
    pub fn open_menu(&mut self) -> bool {
        if self.menu.is_open() {
            return false;
        }
        let Some(entry) = self.listing.selected() else {
            return false;
        };
        let favorite = self.is_favorite(entry);
        self.selected_name = entry.name.clone();
        self.menu.open(favorite);
        true
    }

    pub fn menu_move(&mut self, direction: Direction) {
        self.menu.step(direction);
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Run the highlighted menu item against the selected entry.
    ///
    /// Storage failures are returned after the listing has been refreshed
    /// and the menu closed, so the state stays consistent.
    pub fn menu_confirm(&mut self) -> Result<MenuOutcome> {
        let Some(index) = self.menu.index() else {
            return Ok(MenuOutcome::NotApplicable);
        };
        let Some(entry) = self.listing.selected().cloned() else {
            self.close_menu();
            return Ok(MenuOutcome::Closed);
        };
        self.selected_name = entry.name.clone();

        match MenuItem::from_index(index) {
            Some(MenuItem::Open) => Ok(self.launch(&entry)),
            Some(MenuItem::Favorite) => self.toggle_favorite(&entry),
            Some(MenuItem::Rename) => Ok(self.request_rename(entry)),
            Some(MenuItem::Delete) => self.delete(&entry),
            None => {
                self.close_menu();
                Ok(MenuOutcome::Closed)
            }
        }
    }

    fn launch(&mut self, entry: &FileEntry) -> MenuOutcome {
        let Some(kind) = entry.kind.known() else {
            return MenuOutcome::NotApplicable;
        };
        let full_path = storage::join(self.nav.path(), &entry.name);
        log::info!("launching {} with {}", kind.app_name(), full_path);
        self.loader.start(kind.app_name(), &full_path);
        MenuOutcome::Launched {
            app: kind.app_name(),
        }
    }

    fn toggle_favorite(&mut self, entry: &FileEntry) -> Result<MenuOutcome> {
        if !entry.kind.is_known_app() {
            return Ok(MenuOutcome::NotApplicable);
        }
        if self.is_favorite(entry) {
            self.remove(entry, RemoveScope::FavoriteOnly)?;
            Ok(MenuOutcome::Unpinned)
        } else {
            let result = self.favorites().add(&entry.name, self.nav.path());
            self.close_menu();
            result?;
            Ok(MenuOutcome::Pinned)
        }
    }

    fn delete(&mut self, entry: &FileEntry) -> Result<MenuOutcome> {
        let favorite = self.is_favorite(entry);
        self.remove(entry, RemoveScope::from_flags(favorite, favorite))?;
        Ok(MenuOutcome::Deleted)
    }

    /// Delete per `scope`, then rescan, clamp the selection and close the
    /// menu whether or not the storage calls succeeded.
    fn remove(&mut self, entry: &FileEntry, scope: RemoveScope) -> Result<()> {
        let result = self.favorites().remove(entry, scope, self.nav.path());
        if let Err(ref e) = result {
            log::warn!("removing {} failed: {}", entry.name, e);
        }
        self.rescan_keep_selection();
        self.close_menu();
        result
    }

    fn request_rename(&mut self, entry: FileEntry) -> MenuOutcome {
        if !entry.kind.is_known_app() {
            return MenuOutcome::NotApplicable;
        }
        let prefill = trim_known_ext(&entry.name).to_string();
        self.rename_target = Some(entry);
        MenuOutcome::RenameRequested { prefill }
    }

    /// Text-input continuation of a rename: rename the pending entry to
    /// `new_stem` plus its original extension.
    pub fn finish_rename(&mut self, new_stem: &str) -> Result<MenuOutcome> {
        let Some(entry) = self.rename_target.take() else {
            return Ok(MenuOutcome::NotApplicable);
        };
        self.close_menu();
        let Some(kind) = entry.kind.known() else {
            return Ok(MenuOutcome::NotApplicable);
        };
        if new_stem.is_empty() || new_stem.contains('/') {
            return Ok(MenuOutcome::NotApplicable);
        }

        let new_name = format!("{}{}", new_stem, kind.extension());
        let src = storage::join(self.nav.path(), &entry.name);
        let dst = storage::join(self.nav.path(), &new_name);
        let result = self.storage.rename(&src, &dst);
        match result {
            Ok(()) => log::info!("renamed {} to {}", src, new_name),
            Err(ref e) => log::warn!("renaming {} failed: {}", src, e),
        }
        self.rescan_keep_selection();
        result?;
        self.selected_name = new_name;
        Ok(MenuOutcome::Renamed)
    }

    /// Text input was dismissed without a result.
    pub fn cancel_rename(&mut self) {
        self.rename_target = None;
        self.close_menu();
    }

    /// Whether a rename is waiting for text input.
    #[cfg(test)]
    pub fn rename_pending(&self) -> bool {
        self.rename_target.is_some()
    }
}
