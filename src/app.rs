use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::interval;

use crate::api::client::ApiClient;
use crate::api::model::Opinion;
use crate::data::TRENDING;
use crate::error::Result;
use crate::types::{Category, Screen, SearchRequest};
use crate::ui;

// -- Animation --
const TICK: Duration = Duration::from_millis(50);
/// Wheel sweep step per tick; a full sweep takes ~1.25s
const WHEEL_ANIM_STEP: f64 = 0.04;

const VALIDATION_MESSAGE: &str =
    "Please enter a value in the search bar and select a category from the menu";

/// Input focus on the Home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Categories,
    Trending,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Categories,
            Self::Categories => Self::Trending,
            Self::Trending => Self::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Search => Self::Trending,
            Self::Categories => Self::Search,
            Self::Trending => Self::Categories,
        }
    }
}

/// Home screen input state
pub struct HomeState {
    /// Search bar text, exactly as typed
    pub query: String,
    /// Index into `Category::ALL`; None until the user picks one
    pub category_index: Option<usize>,
    /// Trending carousel cursor
    pub trending_index: usize,
    pub focus: Focus,
    /// Blocking validation alert; swallows input until dismissed
    pub alert: Option<String>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category_index: None,
            trending_index: 0,
            focus: Focus::Search,
            alert: None,
        }
    }
}

impl HomeState {
    pub fn selected_category(&self) -> Option<Category> {
        self.category_index.map(|i| Category::ALL[i])
    }

    fn next_category(&mut self) {
        self.category_index = Some(match self.category_index {
            Some(i) => (i + 1) % Category::ALL.len(),
            None => 0,
        });
    }

    fn prev_category(&mut self) {
        self.category_index = Some(match self.category_index {
            Some(i) => (i + Category::ALL.len() - 1) % Category::ALL.len(),
            None => Category::ALL.len() - 1,
        });
    }
}

/// Fetch lifecycle for one Results screen instance. Failure is not a phase:
/// it navigates to the Error screen instead.
pub enum Phase {
    Loading,
    Ready(Opinion),
}

/// State owned by the active Results screen, created on navigation in and
/// dropped on navigation away
pub struct ResultsState {
    pub request: SearchRequest,
    pub phase: Phase,
    /// Wheel sweep progress, 0.0..=1.0
    pub wheel_anim: f64,
    /// Spinner frame counter while loading
    pub spinner_frame: usize,
}

impl ResultsState {
    fn new(request: SearchRequest) -> Self {
        Self {
            request,
            phase: Phase::Loading,
            wheel_anim: 0.0,
            spinner_frame: 0,
        }
    }
}

/// Main application state
pub struct App {
    /// Navigation stack; index 0 is always Home
    stack: Vec<Screen>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Whether terminal is too small
    pub too_small: bool,
    pub home: HomeState,
    pub results: Option<ResultsState>,
    api: ApiClient,
    /// Direct-launch request from CLI flags, consumed on first run
    initial_request: Option<SearchRequest>,
    /// In-flight fetch; aborted when the Results screen is left
    fetch_handle: Option<tokio::task::JoinHandle<Result<Opinion>>>,
}

impl App {
    pub fn new(api: ApiClient, initial_request: Option<SearchRequest>) -> Self {
        Self {
            stack: vec![Screen::Home],
            should_quit: false,
            show_help: false,
            too_small: false,
            home: HomeState::default(),
            results: None,
            api,
            initial_request,
            fetch_handle: None,
        }
    }

    /// Current screen (top of the navigation stack)
    pub fn screen(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::Home)
    }

    /// Run the main event loop
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        if let Some(request) = self.initial_request.take() {
            self.open_results(request.clone());
            self.start_fetch(&request);
        }

        let mut tick = interval(TICK);
        let mut event_stream = crossterm::event::EventStream::new();

        loop {
            // Check if the fetch task completed
            if self.fetch_handle.as_ref().is_some_and(|h| h.is_finished()) {
                if let Some(handle) = self.fetch_handle.take() {
                    match handle.await {
                        Ok(Ok(opinion)) => self.on_fetch_success(opinion),
                        Ok(Err(e)) => {
                            tracing::warn!(error = %e, "fetch failed");
                            self.on_fetch_error();
                        }
                        // Aborted mid-flight; the screen that owned it is gone
                        Err(_) => {}
                    }
                }
            }

            // Draw
            let size = terminal.size()?;
            self.too_small = size.width < 80 || size.height < 24;
            terminal.draw(|frame| ui::render(frame, self))?;

            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                _ = tick.tick() => self.on_tick(),
                event = event_stream.next() => {
                    if let Some(Ok(evt)) = event {
                        self.handle_event(evt);
                    }
                }
            }
        }
    }

    // -- Navigation --

    /// Validate Home input. On success, normalizes and navigates to Results,
    /// returning the request for the caller to fetch. On failure, raises the
    /// blocking alert and stays put.
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let request = self
            .home
            .selected_category()
            .and_then(|category| SearchRequest::new(&self.home.query, category));

        match request {
            Some(request) => {
                self.open_results(request.clone());
                Some(request)
            }
            None => {
                self.home.alert = Some(VALIDATION_MESSAGE.to_string());
                None
            }
        }
    }

    /// Trending shortcut: synthesizes a request from the selected card,
    /// bypassing manual input entirely.
    pub fn submit_trending(&mut self) -> Option<SearchRequest> {
        let item = &TRENDING[self.home.trending_index % TRENDING.len()];
        let request = SearchRequest::new(item.title, item.category)?;
        self.open_results(request.clone());
        Some(request)
    }

    /// Create fresh Results state and push the screen. Exactly one fetch is
    /// spawned per call to this path, never per render.
    fn open_results(&mut self, request: SearchRequest) {
        tracing::info!(query = %request.query, category = request.category.slug(), "opening results");
        self.abort_fetch();
        self.results = Some(ResultsState::new(request));
        self.stack.push(Screen::Results);
    }

    /// Pop every screen above Home and drop Results state. A no-op when
    /// already at the root, so repeated activation is safe.
    pub fn return_home(&mut self) {
        if self.stack.len() > 1 {
            tracing::debug!("returning to home");
        }
        self.abort_fetch();
        self.results = None;
        self.stack.truncate(1);
    }

    // -- Fetch lifecycle --

    fn start_fetch(&mut self, request: &SearchRequest) {
        self.abort_fetch();
        let api = self.api.clone();
        let request = request.clone();
        self.fetch_handle = Some(tokio::spawn(async move { api.fetch(&request).await }));
    }

    fn abort_fetch(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }

    fn on_fetch_success(&mut self, opinion: Opinion) {
        if let Some(results) = &mut self.results {
            results.phase = Phase::Ready(opinion);
            results.wheel_anim = 0.0;
        }
    }

    fn on_fetch_error(&mut self) {
        if self.screen() == Screen::Results {
            self.results = None;
            self.stack.push(Screen::Error);
        }
    }

    // -- Events --

    fn on_tick(&mut self) {
        if let Some(results) = &mut self.results {
            match results.phase {
                Phase::Loading => {
                    results.spinner_frame = results.spinner_frame.wrapping_add(1);
                }
                Phase::Ready(_) => {
                    if results.wheel_anim < 1.0 {
                        results.wheel_anim = (results.wheel_anim + WHEEL_ANIM_STEP).min(1.0);
                    }
                }
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            // Ctrl+C always quits immediately
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }

            // Help overlay takes priority
            if self.show_help {
                match key.code {
                    KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                    _ => {}
                }
                return;
            }

            // Blocking validation alert
            if self.home.alert.is_some() && self.screen() == Screen::Home {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.home.alert = None;
                }
                return;
            }

            match self.screen() {
                Screen::Home => self.handle_home_key(key),
                Screen::Results => self.handle_results_key(key),
                Screen::Error => self.handle_error_key(key),
            }
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        // '?' opens help except while typing in the search bar
        if key.code == KeyCode::Char('?') && self.home.focus != Focus::Search {
            self.show_help = true;
            return;
        }

        match key.code {
            KeyCode::Tab => self.home.focus = self.home.focus.next(),
            KeyCode::BackTab => self.home.focus = self.home.focus.prev(),
            KeyCode::Enter => {
                let submitted = match self.home.focus {
                    Focus::Trending => self.submit_trending(),
                    _ => self.submit_search(),
                };
                if let Some(request) = submitted {
                    self.start_fetch(&request);
                }
            }
            KeyCode::Esc => match self.home.focus {
                Focus::Search => self.home.focus = Focus::Categories,
                _ => self.should_quit = true,
            },
            _ => match self.home.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Categories => self.handle_category_key(key),
                Focus::Trending => self.handle_trending_key(key),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.home.query.push(c),
            KeyCode::Backspace => {
                self.home.query.pop();
            }
            KeyCode::Down => self.home.focus = Focus::Categories,
            _ => {}
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.home.prev_category(),
            KeyCode::Right | KeyCode::Char('l') => self.home.next_category(),
            KeyCode::Up | KeyCode::Char('k') => self.home.focus = Focus::Search,
            KeyCode::Down | KeyCode::Char('j') => self.home.focus = Focus::Trending,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_trending_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.home.trending_index =
                    (self.home.trending_index + TRENDING.len() - 1) % TRENDING.len();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.home.trending_index = (self.home.trending_index + 1) % TRENDING.len();
            }
            KeyCode::Up | KeyCode::Char('k') => self.home.focus = Focus::Categories,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('h') => self.return_home(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn handle_error_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('h') => self.return_home(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::Stats;

    fn app() -> App {
        let api = ApiClient::new("https://example.com/pov/results", Duration::from_secs(5))
            .unwrap();
        App::new(api, None)
    }

    fn opinion() -> Opinion {
        Opinion {
            rating: 7.5,
            popular_comment: "A".into(),
            recent_comment: "D".into(),
            stats: Stats::Product { total_reviews: 42 },
        }
    }

    #[test]
    fn empty_query_raises_alert_and_stays_home() {
        let mut app = app();
        app.home.category_index = Some(0);
        assert!(app.submit_search().is_none());
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.home.alert.is_some());
    }

    #[test]
    fn whitespace_query_raises_alert() {
        let mut app = app();
        app.home.query = "   ".into();
        app.home.category_index = Some(0);
        assert!(app.submit_search().is_none());
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn unset_category_raises_alert() {
        let mut app = app();
        app.home.query = "dune".into();
        assert!(app.submit_search().is_none());
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.home.alert.is_some());
    }

    #[test]
    fn valid_submit_navigates_with_normalized_request() {
        let mut app = app();
        app.home.query = "  iphone 13 pro  ".into();
        app.home.category_index = Some(5); // Product
        let request = app.submit_search().unwrap();
        assert_eq!(request.query, "iphone 13 pro");
        assert_eq!(request.category, Category::Product);
        assert_eq!(app.screen(), Screen::Results);
        assert!(app.results.is_some());
    }

    #[test]
    fn trending_bypasses_manual_input() {
        let mut app = app();
        app.home.trending_index = 1; // Dune / movie
        let request = app.submit_trending().unwrap();
        assert_eq!(request.query, "Dune");
        assert_eq!(request.category, Category::Movie);
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn category_cycling_wraps() {
        let mut home = HomeState::default();
        home.next_category();
        assert_eq!(home.category_index, Some(0));
        home.prev_category();
        assert_eq!(home.category_index, Some(Category::ALL.len() - 1));
        home.next_category();
        assert_eq!(home.category_index, Some(0));
    }

    #[test]
    fn fetch_error_moves_to_error_screen() {
        let mut app = app();
        app.home.query = "dune".into();
        app.home.category_index = Some(2); // Movie
        app.submit_search().unwrap();
        app.on_fetch_error();
        assert_eq!(app.screen(), Screen::Error);
        assert!(app.results.is_none());
    }

    #[test]
    fn fetch_success_readies_results() {
        let mut app = app();
        app.home.query = "ps5".into();
        app.home.category_index = Some(5);
        app.submit_search().unwrap();
        app.on_fetch_success(opinion());
        let results = app.results.as_ref().unwrap();
        assert!(matches!(results.phase, Phase::Ready(_)));
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn return_home_clears_stack_and_is_idempotent() {
        let mut app = app();
        app.home.query = "dune".into();
        app.home.category_index = Some(2);
        app.submit_search().unwrap();
        app.on_fetch_error();
        assert_eq!(app.screen(), Screen::Error);

        app.return_home();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.results.is_none());

        // Already at the root: nothing changes
        app.return_home();
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn new_search_replaces_results_state() {
        let mut app = app();
        app.home.query = "dune".into();
        app.home.category_index = Some(2);
        app.submit_search().unwrap();
        app.on_fetch_success(opinion());

        app.return_home();
        app.home.query = "adele".into();
        app.home.category_index = Some(3); // Music
        app.submit_search().unwrap();
        let results = app.results.as_ref().unwrap();
        assert!(matches!(results.phase, Phase::Loading));
        assert_eq!(results.request.query, "adele");
    }
}
