// App state and main event loop.
// Routes key presses to the active tab, turns actions into network effects, and applies their results.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::config::SessionConfig;
use crate::error::{QuireError, Result};
use crate::github::GitHubClient;
use crate::render;
use crate::state::{
    ConfigForm, FileBrowserState, ScraperForm, StatusPanel, Toast, TranslatorFocus,
    TranslatorForm,
};
use crate::storage::KeyValueStore;
use crate::tasks::{self, AppEvent, Effect, WorkflowDispatch, files};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Config,
    Scraper,
    Translator,
    Files,
    Status,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Config,
        Tab::Scraper,
        Tab::Translator,
        Tab::Files,
        Tab::Status,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Config => "config",
            Tab::Scraper => "scraper",
            Tab::Translator => "translator",
            Tab::Files => "files",
            Tab::Status => "status",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Config => "Config",
            Tab::Scraper => "Scraper",
            Tab::Translator => "Translator",
            Tab::Files => "Files",
            Tab::Status => "Status",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Config => Tab::Scraper,
            Tab::Scraper => Tab::Translator,
            Tab::Translator => Tab::Files,
            Tab::Files => Tab::Status,
            Tab::Status => Tab::Config,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Config => Tab::Status,
            Tab::Scraper => Tab::Config,
            Tab::Translator => Tab::Scraper,
            Tab::Files => Tab::Translator,
            Tab::Status => Tab::Files,
        }
    }

    /// Tabs whose printable keys go into a text field.
    pub fn takes_text(&self) -> bool {
        matches!(self, Tab::Config | Tab::Scraper | Tab::Translator)
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    active_tab: Tab,
    /// Settings every request is made with. Replaced only by `set_config`.
    config: SessionConfig,
    store: Box<dyn KeyValueStore>,
    pub config_form: ConfigForm,
    pub scraper_form: ScraperForm,
    pub translator_form: TranslatorForm,
    pub files: FileBrowserState,
    pub status: StatusPanel,
    pub toast: Option<Toast>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Load settings from `store` and open the config tab.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let config = SessionConfig::load(store.as_ref());
        let mut app = Self {
            active_tab: Tab::default(),
            config_form: ConfigForm::from_config(&config),
            config,
            store,
            scraper_form: ScraperForm::default(),
            translator_form: TranslatorForm::default(),
            files: FileBrowserState::new(),
            status: StatusPanel::new(),
            toast: None,
            show_help: false,
            should_quit: false,
        };
        app.open_tab(Tab::Config.id());
        app
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Activate the tab with `id`. Unknown ids leave the current tab active.
    pub fn open_tab(&mut self, id: &str) {
        if let Some(tab) = Tab::from_id(id) {
            self.active_tab = tab;
        }
    }

    /// Whether `tab`'s panel and tab-bar entry are the active ones.
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// Persist `config` and make it the one used for new requests.
    pub fn set_config(&mut self, config: SessionConfig) -> Result<()> {
        config.save(self.store.as_mut())?;
        tracing::info!(config = ?config, "configuration saved");
        self.config = config;
        Ok(())
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Instant::now()));
    }

    /// Drop the notice once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Save the config form.
    pub fn save_config(&mut self) {
        let config = self.config_form.to_config();
        match self.set_config(config) {
            Ok(()) => self.notify("Configuration saved."),
            Err(e) => {
                tracing::error!(error = %e, "failed to save configuration");
                self.notify(format!("Error saving configuration: {}", e));
            }
        }
    }

    fn dispatch(&mut self, dispatch: WorkflowDispatch) -> Vec<Effect> {
        if let Err(e) = self.config.require_configured() {
            self.notify(dispatch.workflow.error_notice(&e));
            return Vec::new();
        }
        vec![Effect::Dispatch(dispatch)]
    }

    pub fn dispatch_scraper(&mut self) -> Vec<Effect> {
        let inputs = self.scraper_form.inputs(&self.config);
        self.dispatch(inputs.into())
    }

    pub fn dispatch_translator(&mut self) -> Vec<Effect> {
        let inputs = self.translator_form.inputs(&self.config);
        self.dispatch(inputs.into())
    }

    /// Fetch recent runs. Silently does nothing when unconfigured.
    pub fn refresh_status(&mut self) -> Vec<Effect> {
        if !self.config.is_configured() {
            return Vec::new();
        }
        let request = self.status.seq.issue();
        vec![Effect::RefreshStatus { request }]
    }

    pub fn list_files(&mut self) -> Vec<Effect> {
        if let Err(e) = self.config.require_configured() {
            self.notify(files::list_error_notice(&e));
            return Vec::new();
        }
        let request = self.files.list_seq.issue();
        vec![Effect::ListFolder {
            request,
            folder: self.files.folder().to_string(),
        }]
    }

    pub fn load_file(&mut self, path: &str) -> Vec<Effect> {
        if let Err(e) = self.config.require_configured() {
            self.notify(files::load_error_notice(&e));
            return Vec::new();
        }
        let request = self.files.load_seq.issue();
        vec![Effect::LoadFile {
            request,
            path: path.to_string(),
        }]
    }

    fn load_selected_file(&mut self) -> Vec<Effect> {
        match self.files.files.selected_item() {
            Some(item) => {
                let path = item.path.clone();
                self.load_file(&path)
            }
            None => Vec::new(),
        }
    }

    /// Apply a finished network task.
    pub fn handle_app_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::Dispatched { workflow, result } => match result {
                Ok(()) => {
                    self.notify(workflow.success_notice());
                    self.refresh_status()
                }
                Err(e) => {
                    tracing::error!(workflow = workflow.file_name(), error = %e, "dispatch failed");
                    self.notify(workflow.error_notice(&e));
                    Vec::new()
                }
            },
            AppEvent::RunsLoaded { request, result } => {
                if !self.status.seq.settle(request) {
                    tracing::debug!(request, "dropping stale status response");
                    return Vec::new();
                }
                match result {
                    Ok(runs) => self.status.show(render::status_lines(&runs)),
                    // Status failures are diagnostic only
                    Err(e) => tracing::warn!(error = %e, "status refresh failed"),
                }
                Vec::new()
            }
            AppEvent::FolderListed { request, result } => {
                if !self.files.list_seq.settle(request) {
                    tracing::debug!(request, "dropping stale folder listing");
                    return Vec::new();
                }
                match result {
                    Ok(entries) => self.files.show_files(render::file_items(&entries)),
                    Err(e) => {
                        tracing::error!(error = %e, "listing files failed");
                        self.notify(files::list_error_notice(&e));
                    }
                }
                Vec::new()
            }
            AppEvent::FileLoaded { request, result } => {
                if !self.files.load_seq.settle(request) {
                    tracing::debug!(request, "dropping stale file content");
                    return Vec::new();
                }
                match result {
                    Ok(file) => self.files.show_content(file),
                    Err(e) => {
                        tracing::error!(error = %e, "loading file failed");
                        self.notify(files::load_error_notice(&e));
                    }
                }
                Vec::new()
            }
        }
    }

    /// Append pasted text to the focused field.
    pub fn handle_paste(&mut self, text: &str) {
        match self.active_tab {
            Tab::Config => self.config_form.focused_mut().paste_line(text),
            Tab::Scraper => self.scraper_form.html.paste(text),
            Tab::Translator if self.translator_form.focus == TranslatorFocus::BatchSize => {
                self.translator_form.batch_size.paste_line(text)
            }
            _ => {}
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => return self.refresh_status(),
                KeyCode::Char('u') => self.clear_focused_field(),
                _ => {}
            }
            return Vec::new();
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::F(1) => {
                self.show_help = true;
                return Vec::new();
            }
            KeyCode::Tab => {
                self.open_tab(self.active_tab.next().id());
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.open_tab(self.active_tab.prev().id());
                return Vec::new();
            }
            _ => {}
        }

        if !self.active_tab.takes_text() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Vec::new();
                }
                KeyCode::Char('r') => return self.refresh_status(),
                _ => {}
            }
        }

        match self.active_tab {
            Tab::Config => self.handle_config_key(key.code),
            Tab::Scraper => self.handle_scraper_key(key.code),
            Tab::Translator => self.handle_translator_key(key.code),
            Tab::Files => self.handle_files_key(key.code),
            Tab::Status => Vec::new(),
        }
    }

    fn clear_focused_field(&mut self) {
        match self.active_tab {
            Tab::Config => self.config_form.focused_mut().clear(),
            Tab::Scraper => self.scraper_form.html.clear(),
            Tab::Translator => self.translator_form.batch_size.clear(),
            _ => {}
        }
    }

    fn handle_config_key(&mut self, code: KeyCode) -> Vec<Effect> {
        match code {
            KeyCode::Up => self.config_form.focus_prev(),
            KeyCode::Down => self.config_form.focus_next(),
            KeyCode::Enter => self.save_config(),
            KeyCode::Backspace => self.config_form.focused_mut().backspace(),
            KeyCode::Char(c) => self.config_form.focused_mut().push(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_scraper_key(&mut self, code: KeyCode) -> Vec<Effect> {
        match code {
            KeyCode::Enter => return self.dispatch_scraper(),
            KeyCode::Backspace => self.scraper_form.html.backspace(),
            KeyCode::Char(c) => self.scraper_form.html.push(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_translator_key(&mut self, code: KeyCode) -> Vec<Effect> {
        if code == KeyCode::Enter {
            return self.dispatch_translator();
        }
        let form = &mut self.translator_form;
        match (code, form.focus) {
            (KeyCode::Up | KeyCode::Down, _) => form.toggle_focus(),
            (KeyCode::Char(' '), TranslatorFocus::Force) => form.toggle_force(),
            (KeyCode::Backspace, TranslatorFocus::BatchSize) => form.batch_size.backspace(),
            (KeyCode::Char(c), TranslatorFocus::BatchSize) => form.batch_size.push(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_files_key(&mut self, code: KeyCode) -> Vec<Effect> {
        match code {
            KeyCode::Left => self.files.prev_folder(),
            KeyCode::Right => self.files.next_folder(),
            KeyCode::Char('f') => return self.list_files(),
            KeyCode::Up | KeyCode::Char('k') => self.files.files.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.files.files.select_next(),
            KeyCode::Enter => return self.load_selected_file(),
            KeyCode::PageUp => self.files.scroll_up(),
            KeyCode::PageDown => self.files.scroll_down(),
            _ => {}
        }
        Vec::new()
    }

    /// Main event loop.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        client: GitHubClient,
    ) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let mut effects = self.handle_events()?;
            while let Ok(event) = rx.try_recv() {
                effects.extend(self.handle_app_event(event));
            }
            for effect in effects {
                self.spawn(&client, &tx, effect);
            }

            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Run `effect` on its own task with a snapshot of the current config.
    fn spawn(
        &self,
        client: &GitHubClient,
        tx: &mpsc::UnboundedSender<AppEvent>,
        effect: Effect,
    ) {
        let client = client.clone();
        let config = self.config.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = tasks::execute(&client, &config, effect).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(event);
        });
    }

    /// Handle keyboard, paste and other terminal events.
    fn handle_events(&mut self) -> Result<Vec<Effect>> {
        if !event::poll(Duration::from_millis(100)).map_err(QuireError::Io)? {
            return Ok(Vec::new());
        }
        let effects = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => {
                self.handle_paste(&text);
                Vec::new()
            }
            _ => Vec::new(),
        };
        Ok(effects)
    }
}
