//! Local UI chrome state (tabs and dialogs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`design`,
//! `tradespace`) so navigation rules can be tested without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    Design,
    Tradespace,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Design, Tab::Tradespace];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Design => "Design",
            Tab::Tradespace => "Tradespace",
        }
    }
}

/// Modal dialogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    Login,
    Upload,
}

impl Dialog {
    /// The login gate is static: only Cancel or a successful login closes it.
    pub fn closes_on_backdrop(self) -> bool {
        self == Dialog::Upload
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub tab: Tab,
    pub login_open: bool,
    pub upload_open: bool,
    /// Bumped each time the tradespace tab becomes visible.
    pub tradespace_shown_seq: u64,
}

impl UiState {
    /// Switch tabs. While logged out, leaving Home opens the login dialog
    /// instead. Returns whether the tab changed.
    pub fn request_tab(&mut self, tab: Tab, logged_in: bool) -> bool {
        if !logged_in && tab != Tab::Home {
            self.login_open = true;
            return false;
        }
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        if tab == Tab::Tradespace {
            self.tradespace_shown_seq += 1;
        }
        true
    }

    pub fn close(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::Login => self.login_open = false,
            Dialog::Upload => self.upload_open = false,
        }
    }

    /// Click on the backdrop outside a dialog panel.
    pub fn backdrop_click(&mut self, dialog: Dialog) {
        if dialog.closes_on_backdrop() {
            self.close(dialog);
        }
    }

    /// State after a design is displayed: Design tab, upload dialog closed.
    pub fn show_design(&mut self) {
        self.tab = Tab::Design;
        self.upload_open = false;
    }

    /// Back to the logged-out landing view.
    pub fn reset_to_home(&mut self) {
        self.tab = Tab::Home;
        self.upload_open = false;
    }
}
