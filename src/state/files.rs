// Files tab state.
// Folder selector, file list, and the content viewer.

use crate::render::FileItem;
use crate::tasks::LoadedFile;
use crate::tasks::files::FOLDERS;

use super::list::SelectableList;
use super::request::RequestSeq;

const PAGE: u16 = 20;

#[derive(Debug, Default)]
pub struct FileBrowserState {
    /// Index into `FOLDERS`.
    pub folder_index: usize,
    pub files: SelectableList<FileItem>,
    /// Most recently opened file; replaced on every selection.
    pub content: Option<LoadedFile>,
    pub content_scroll: u16,
    pub list_seq: RequestSeq,
    pub load_seq: RequestSeq,
}

impl FileBrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(&self) -> &'static str {
        FOLDERS[self.folder_index]
    }

    pub fn next_folder(&mut self) {
        self.folder_index = (self.folder_index + 1) % FOLDERS.len();
    }

    pub fn prev_folder(&mut self) {
        self.folder_index = (self.folder_index + FOLDERS.len() - 1) % FOLDERS.len();
    }

    /// Replace the file list with a fresh listing.
    pub fn show_files(&mut self, items: Vec<FileItem>) {
        self.files.set_loaded(items);
    }

    /// Replace the viewer content.
    pub fn show_content(&mut self, file: LoadedFile) {
        self.content = Some(file);
        self.content_scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(PAGE);
    }

    pub fn scroll_down(&mut self) {
        let lines = self
            .content
            .as_ref()
            .map_or(0, |file| file.text.lines().count());
        let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.content_scroll = self.content_scroll.saturating_add(PAGE).min(max);
    }

    /// Whether the latest listing is still outstanding.
    pub fn is_listing(&self) -> bool {
        self.list_seq.is_pending()
    }

    pub fn is_loading_file(&self) -> bool {
        self.load_seq.is_pending()
    }
}
