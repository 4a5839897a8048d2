use chrono::Local;
use iced::futures::channel::mpsc;
use iced::widget::{button, column, container, pick_list, progress_bar, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use product_renamer::{EventSink, RenameEvent, RunSummary, Scheme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Maximum number of lines kept in the log panel
const LOG_LIMIT: usize = 2000;

/// Main application state
struct RenamerApp {
    /// Folder typed in or picked with the dialog
    folder: String,
    scheme: Scheme,
    /// True while a pass is running on the worker
    running: bool,
    /// Last (done, total) reported by the worker
    progress: (usize, usize),
    /// Group currently being renamed, empty when idle
    current_group: String,
    log: Vec<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    FolderChanged(String),
    /// User clicked the "Browse" button
    BrowseFolder,
    SchemeSelected(Scheme),
    /// User clicked "Run rename"
    Run,
    /// Event streamed from the rename worker
    Worker(RenameEvent),
    /// Background pass finished
    RunComplete(Result<RunSummary, String>),
}

/// Forwards worker events into the UI's message stream
struct UiSink(mpsc::UnboundedSender<RenameEvent>);

impl EventSink for UiSink {
    fn emit(&self, event: RenameEvent) {
        // Window closed: the pass keeps going without an audience
        let _ = self.0.unbounded_send(event);
    }
}

impl RenamerApp {
    /// Create a new instance of the application
    fn new(folder: Option<String>) -> (Self, Task<Message>) {
        (
            RenamerApp {
                folder: folder.unwrap_or_default(),
                scheme: Scheme::default(),
                running: false,
                progress: (0, 0),
                current_group: String::new(),
                log: Vec::new(),
                status: "Ready. Select an asset folder.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FolderChanged(folder) => {
                self.folder = folder;
                Task::none()
            }
            Message::BrowseFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select asset folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.folder = folder_path.display().to_string();
                    self.push_log(format!("[UI] Folder selected: {}", self.folder));
                }
                Task::none()
            }
            Message::SchemeSelected(scheme) => {
                self.scheme = scheme;
                Task::none()
            }
            Message::Run => {
                let folder = self.folder.trim();
                if folder.is_empty() {
                    self.status = "Select a folder with the assets first.".to_string();
                    return Task::none();
                }

                let folder_path = PathBuf::from(folder);
                self.running = true;
                self.progress = (0, 0);
                self.current_group.clear();
                self.status = format!("Renaming {}...", folder_path.display());
                self.push_log("====== RUN ======".to_string());

                let (sender, receiver) = mpsc::unbounded();
                let events = Task::run(receiver, Message::Worker);
                let pass = Task::perform(
                    product_renamer::run_in_background(folder_path, self.scheme, UiSink(sender)),
                    |result| Message::RunComplete(result.map_err(|e| e.to_string())),
                );

                Task::batch([events, pass])
            }
            Message::Worker(event) => {
                match event {
                    RenameEvent::Progress { done, total } => self.progress = (done, total),
                    RenameEvent::GroupChanged(code) => self.current_group = code,
                    log @ RenameEvent::Log { .. } => self.push_log(log.to_string()),
                }
                Task::none()
            }
            Message::RunComplete(result) => {
                self.running = false;
                self.status = match result {
                    Ok(summary) => format!(
                        "✅ Done: {} renamed, {} converted, {} skipped, {} unrecognized, {} failed.",
                        summary.renamed_count,
                        summary.converted_count,
                        summary.skipped_count,
                        summary.unparsed_count,
                        summary.failed_count
                    ),
                    Err(e) => {
                        self.push_log(format!("[ERROR] {}", e));
                        format!("❌ {}", e)
                    }
                };
                Task::none()
            }
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(format!("{}  {}", Local::now().format("%H:%M:%S"), line));
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    fn percent(&self) -> f32 {
        let (done, total) = self.progress;
        if total == 0 {
            0.0
        } else {
            done as f32 / total as f32 * 100.0
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let folder_row = row![
            text_input("Asset folder", &self.folder)
                .on_input(Message::FolderChanged)
                .padding(6),
            button("Browse").on_press(Message::BrowseFolder).padding(6),
        ]
        .spacing(10);

        let controls = row![
            pick_list(Scheme::ALL, Some(self.scheme), Message::SchemeSelected),
            button("Run rename")
                .on_press_maybe((!self.running).then_some(Message::Run))
                .padding(10),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let group_label = if self.current_group.is_empty() {
            "–"
        } else {
            self.current_group.as_str()
        };
        let progress = row![
            progress_bar(0.0..=100.0, self.percent()),
            text(format!("GROUP: {}", group_label)).size(14),
        ]
        .spacing(15)
        .align_y(Alignment::Center);

        let log_lines: Column<Message> = Column::with_children(
            self.log.iter().map(|line| text(line).size(13).into()),
        )
        .spacing(2);

        let content: Column<Message> = column![
            text("Product Image Renamer").size(32),
            text("PNG → JPG, ordered views, clean naming.").size(14),
            folder_row,
            controls,
            progress,
            text(&self.status).size(16),
            text("PROCESS LOG").size(12),
            scrollable(log_lines).height(Length::Fill).width(Length::Fill),
        ]
        .spacing(14)
        .padding(30);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // RUST_LOG overrides; default keeps dependencies quiet
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,product_renamer=info")),
        )
        .init();

    // Optional first argument pre-fills the folder field
    let initial_folder = std::env::args().nth(1);

    iced::application("Product Image Renamer", RenamerApp::update, RenamerApp::view)
        .theme(RenamerApp::theme)
        .centered()
        .run_with(move || RenamerApp::new(initial_folder))
}
