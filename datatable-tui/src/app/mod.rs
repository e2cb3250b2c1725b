//! Table application state and event handling.

mod action;
mod event_loop;
mod render;
mod theme;

pub use action::Action;
pub use event_loop::run;
pub use theme::Theme;

use datatable_lib::{FetchState, SortToggle, TableConfig, TableView};
use log::{debug, info};

use crate::widgets::Spinner;

/// Side effects the event loop has to carry out after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Ignored,
    /// The table configuration changed and should be saved.
    ConfigChanged,
}

/// The table screen: a [`TableView`] plus cursor and presentation state.
pub struct App {
    view: TableView,
    /// Preferences as stored, without one-off command-line overrides.
    saved: TableConfig,
    theme: Theme,
    spinner: Spinner,
    /// Cursor row within the current page.
    cursor: usize,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(view: TableView) -> Self {
        Self {
            saved: view.config().clone(),
            view,
            theme: Theme::default(),
            spinner: Spinner::default(),
            cursor: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Use `saved` as the preferences to persist instead of the active config.
    pub fn with_saved_config(mut self, saved: TableConfig) -> Self {
        self.saved = saved;
        self
    }

    /// Preferences to write back when the sort mode changes.
    pub fn saved_config(&self) -> &TableConfig {
        &self.saved
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn tick_spinner(&mut self) {
        self.spinner.advance();
    }

    /// Feed a fetch snapshot into the table.
    pub fn apply_fetch(&mut self, state: &FetchState) {
        self.view.apply_fetch(state);
        if let Some(error) = &state.error {
            self.status = Some(format!("Failed to load records: {}", error));
        } else if !state.loading {
            info!("Table loaded with {} records", self.view.records().len());
        }
        self.clamp_cursor();
    }

    pub fn handle(&mut self, action: Action) -> Outcome {
        debug!("Action: {:?}", action);
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::SearchInput(c) => {
                let mut query = self.view.query().to_string();
                query.push(c);
                self.search(&query);
            }
            Action::SearchBackspace => {
                let mut query = self.view.query().to_string();
                if query.pop().is_none() {
                    return Outcome::Ignored;
                }
                self.search(&query);
            }
            Action::SearchClear => {
                if self.view.query().is_empty() {
                    return Outcome::Ignored;
                }
                self.search("");
            }
            Action::Sort(column) => {
                self.view.sort(column);
            }
            Action::ToggleSortMode => {
                let toggle = match self.view.config().sort_toggle {
                    SortToggle::Reverse => SortToggle::Descending,
                    SortToggle::Descending => SortToggle::Reverse,
                };
                self.view.set_sort_toggle(toggle);
                self.saved.sort_toggle = toggle;
                self.status = Some(match toggle {
                    SortToggle::Reverse => "Repeat sort reverses the current order".into(),
                    SortToggle::Descending => "Repeat sort flips between ascending and descending".into(),
                });
                return Outcome::ConfigChanged;
            }
            Action::CursorUp => {
                if self.cursor == 0 {
                    return Outcome::Ignored;
                }
                self.cursor -= 1;
            }
            Action::CursorDown => {
                if self.cursor + 1 >= self.view.page_rows().len() {
                    return Outcome::Ignored;
                }
                self.cursor += 1;
            }
            Action::ToggleRow => return self.toggle_at(self.cursor),
            Action::ToggleRowAt(index) => {
                let outcome = self.toggle_at(index);
                if outcome == Outcome::Handled {
                    self.cursor = index;
                }
                return outcome;
            }
            Action::NextPage => {
                if !self.view.next_page() {
                    return Outcome::Ignored;
                }
                self.cursor = 0;
            }
            Action::PreviousPage => {
                if !self.view.previous_page() {
                    return Outcome::Ignored;
                }
                self.cursor = 0;
            }
            Action::ClearSelection => {
                self.view.clear_selection();
            }
        }
        self.clamp_cursor();
        Outcome::Handled
    }

    fn search(&mut self, query: &str) {
        self.view.search(query);
        self.cursor = 0;
    }

    fn toggle_at(&mut self, index: usize) -> Outcome {
        let Some(record) = self.view.page_rows().get(index).cloned() else {
            return Outcome::Ignored;
        };
        self.view.toggle_row(&record);
        Outcome::Handled
    }

    fn clamp_cursor(&mut self) {
        let rows = self.view.page_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use datatable_lib::source::fixture;
    use datatable_lib::{Column, TableConfig};

    use super::*;

    fn loaded_app(n: usize) -> App {
        let records = fixture::records().unwrap().into_iter().take(n).collect();
        App::new(TableView::with_records(TableConfig::default(), records))
    }

    #[test]
    fn test_typing_filters() {
        let mut app = loaded_app(60);
        for c in "OLI".chars() {
            app.handle(Action::SearchInput(c));
        }
        assert_eq!(app.view().query(), "OLI");
        assert!(app.view().filtered().iter().all(|r| r.name.to_lowercase().contains("oli")));

        app.handle(Action::SearchBackspace);
        assert_eq!(app.view().query(), "OL");
        app.handle(Action::SearchClear);
        assert_eq!(app.view().filtered().len(), 60);
        assert_eq!(app.handle(Action::SearchClear), Outcome::Ignored);
    }

    #[test]
    fn test_cursor_stays_on_page() {
        let mut app = loaded_app(30);
        assert_eq!(app.handle(Action::CursorUp), Outcome::Ignored);
        for _ in 0..40 {
            app.handle(Action::CursorDown);
        }
        assert_eq!(app.cursor(), 24);

        app.handle(Action::NextPage);
        assert_eq!(app.view().current_page(), 2);
        assert_eq!(app.cursor(), 0);
        for _ in 0..10 {
            app.handle(Action::CursorDown);
        }
        assert_eq!(app.cursor(), 4);
        assert_eq!(app.handle(Action::NextPage), Outcome::Ignored);
    }

    #[test]
    fn test_toggle_row_under_cursor() {
        let mut app = loaded_app(30);
        app.handle(Action::CursorDown);
        let email = app.view().page_rows()[1].email.clone();

        app.handle(Action::ToggleRow);
        assert!(app.view().is_selected(&email));
        app.handle(Action::ToggleRowAt(1));
        assert!(!app.view().is_selected(&email));
        assert_eq!(app.handle(Action::ToggleRowAt(99)), Outcome::Ignored);
    }

    #[test]
    fn test_toggle_sort_mode_requests_save() {
        let mut app = loaded_app(5);
        assert_eq!(app.handle(Action::ToggleSortMode), Outcome::ConfigChanged);
        assert_eq!(app.view().config().sort_toggle, SortToggle::Descending);
        assert!(app.status().is_some());
    }

    #[test]
    fn test_click_outside_page_keeps_cursor() {
        let mut app = loaded_app(30);
        app.handle(Action::CursorDown);
        app.handle(Action::CursorDown);

        assert_eq!(app.handle(Action::ToggleRowAt(99)), Outcome::Ignored);
        assert_eq!(app.cursor(), 2);

        app.handle(Action::ToggleRowAt(4));
        assert_eq!(app.cursor(), 4);
    }

    #[test]
    fn test_toggle_sort_mode_keeps_overrides_out_of_saved_config() {
        let active = TableConfig::default()
            .with_page_size(3)
            .with_fetch_delay(std::time::Duration::ZERO);
        let mut app = App::new(TableView::new(active)).with_saved_config(TableConfig::default());

        app.handle(Action::ToggleSortMode);
        assert_eq!(app.view().config().page_size, 3);
        assert_eq!(
            app.saved_config(),
            &TableConfig::default().with_sort_toggle(SortToggle::Descending)
        );
    }

    #[test]
    fn test_fetch_error_sets_status() {
        let mut app = App::new(TableView::default());
        app.apply_fetch(&FetchState {
            loading: false,
            records: Vec::new(),
            error: Some("file not found".into()),
        });
        assert_eq!(app.status(), Some("Failed to load records: file not found"));
        assert!(!app.view().is_loading());
    }

    #[test]
    fn test_sort_action() {
        let mut app = loaded_app(10);
        app.handle(Action::Sort(Column::Email));
        assert_eq!(app.view().sort_column(), Some(Column::Email));
    }
}
