// Input forms for the config, scraper and translator tabs.
// Fields hold raw strings; nothing is validated.

use crate::config::SessionConfig;
use crate::tasks::{ScraperInputs, TranslatorInputs};

/// A single-value text field. Editing always happens at the end.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub label: &'static str,
    pub value: String,
    /// Render as bullets (tokens).
    pub masked: bool,
}

impl TextInput {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn paste(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Paste into a single-line field. Line breaks are dropped.
    pub fn paste_line(&mut self, text: &str) {
        self.value
            .extend(text.chars().filter(|c| !matches!(*c, '\r' | '\n')));
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Text to draw: masked fields show one bullet per character.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Move a focus index one step within `len` fields, wrapping.
fn step(focus: usize, len: usize, forward: bool) -> usize {
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

/// The five settings fields.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    pub fields: [TextInput; 5],
    pub focus: usize,
}

impl ConfigForm {
    const TOKEN: usize = 0;
    const OWNER: usize = 1;
    const REPO: usize = 2;
    const SOURCE_URL: usize = 3;
    const BASE_DIR: usize = 4;

    /// Fill the fields from a loaded config.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            fields: [
                TextInput::masked("GitHub token").with_value(&config.token),
                TextInput::new("Owner").with_value(&config.owner),
                TextInput::new("Repository").with_value(&config.repo),
                TextInput::new("Source URL").with_value(&config.source_url),
                TextInput::new("Base directory").with_value(&config.base_dir),
            ],
            focus: 0,
        }
    }

    /// Read the fields back out as a config.
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig {
            token: self.fields[Self::TOKEN].value.clone(),
            owner: self.fields[Self::OWNER].value.clone(),
            repo: self.fields[Self::REPO].value.clone(),
            source_url: self.fields[Self::SOURCE_URL].value.clone(),
            base_dir: self.fields[Self::BASE_DIR].value.clone(),
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        &mut self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, self.fields.len(), true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, self.fields.len(), false);
    }
}

/// Scraper tab: the chapter-list HTML.
#[derive(Debug, Clone)]
pub struct ScraperForm {
    pub html: TextInput,
}

impl Default for ScraperForm {
    fn default() -> Self {
        Self {
            html: TextInput::new("Chapter list HTML"),
        }
    }
}

impl ScraperForm {
    pub fn inputs(&self, config: &SessionConfig) -> ScraperInputs {
        ScraperInputs {
            html_content: self.html.value.clone(),
            source_url: config.source_url.clone(),
            base_dir: config.base_dir.clone(),
        }
    }
}

/// Which translator control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslatorFocus {
    #[default]
    BatchSize,
    Force,
}

/// Translator tab: batch size and force toggle.
#[derive(Debug, Clone)]
pub struct TranslatorForm {
    pub batch_size: TextInput,
    pub force: bool,
    pub focus: TranslatorFocus,
}

impl Default for TranslatorForm {
    fn default() -> Self {
        Self {
            batch_size: TextInput::new("Batch size").with_value("10"),
            force: false,
            focus: TranslatorFocus::default(),
        }
    }
}

impl TranslatorForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            TranslatorFocus::BatchSize => TranslatorFocus::Force,
            TranslatorFocus::Force => TranslatorFocus::BatchSize,
        };
    }

    pub fn toggle_force(&mut self) {
        self.force = !self.force;
    }

    pub fn inputs(&self, config: &SessionConfig) -> TranslatorInputs {
        TranslatorInputs {
            batch_size: self.batch_size.value.clone(),
            force: self.force,
            base_dir: config.base_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionConfig {
        SessionConfig {
            token: "ghp_abc".to_string(),
            owner: "octocat".to_string(),
            repo: "novels".to_string(),
            source_url: "https://www.52shuku.net".to_string(),
            base_dir: "bjXRF".to_string(),
        }
    }

    #[test]
    fn test_config_form_round_trip() {
        let form = ConfigForm::from_config(&sample());
        assert_eq!(form.to_config(), sample());
    }

    #[test]
    fn test_config_form_edits() {
        let mut form = ConfigForm::from_config(&SessionConfig::default());
        form.focus_next();
        form.focus_next();
        "novels".chars().for_each(|c| form.focused_mut().push(c));

        assert_eq!(form.to_config().repo, "novels");

        form.focused_mut().backspace();
        assert_eq!(form.to_config().repo, "novel");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = ConfigForm::from_config(&SessionConfig::default());
        form.focus_prev();
        assert_eq!(form.focus, 4);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_token_is_masked() {
        let form = ConfigForm::from_config(&sample());
        assert_eq!(form.fields[0].display(), "•••••••");
        assert_eq!(form.fields[1].display(), "octocat");
    }

    #[test]
    fn test_paste_line_drops_line_breaks() {
        let mut input = TextInput::masked("Token");
        input.paste_line("ghp_abc123\r\n");
        assert_eq!(input.value, "ghp_abc123");
        assert_eq!(input.display().chars().count(), 10);
    }

    #[test]
    fn test_paste_keeps_newlines() {
        let mut form = ScraperForm::default();
        form.html.paste("<ul>\n<li><a href=\"/1.html\">1</a></li>\n</ul>");

        let inputs = form.inputs(&sample());
        assert!(inputs.html_content.contains('\n'));
        assert_eq!(inputs.source_url, "https://www.52shuku.net");
        assert_eq!(inputs.base_dir, "bjXRF");
    }

    #[test]
    fn test_translator_form_inputs() {
        let mut form = TranslatorForm::default();
        form.batch_size.clear();
        form.batch_size.push('5');
        form.toggle_force();

        let inputs = form.inputs(&sample());
        assert_eq!(inputs.batch_size, "5");
        assert!(inputs.force);
    }
}
