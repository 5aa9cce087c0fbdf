use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::input::Action;
use crate::model::{subject_names, NewsItem};

/// Identifies one activation of the news view. Loads are tagged with it so a
/// result that outlives its view is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation(pub u64);

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Vec<NewsItem>),
}

#[derive(Debug)]
pub struct NewsView {
    pub activation: Activation,
    pub state: LoadState,
    pub selected: usize,
    pub detail_open: bool,
    /// First line of the detail popup that is shown.
    pub detail_scroll: usize,
}

impl NewsView {
    fn new(activation: Activation) -> Self {
        Self {
            activation,
            state: LoadState::Loading,
            selected: 0,
            detail_open: false,
            detail_scroll: 0,
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        match &self.state {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.items().get(self.selected)
    }

    /// Lines in the detail popup: title, a blank line, then the details.
    pub fn detail_line_count(&self) -> usize {
        self.selected_item()
            .map_or(0, |item| 2 + item.details.lines().count())
    }
}

#[derive(Debug, Default)]
pub struct SubjectsView {
    pub selected: usize,
    pub notice: Option<String>,
}

#[derive(Debug)]
pub enum Screen {
    News(NewsView),
    Subjects(SubjectsView),
}

/// What the event loop has to do after an action.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    StartLoad(Activation),
    CancelLoad,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub status: String,
    pub tick: usize,
    next_activation: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::News(NewsView::new(Activation(1))),
            status: "Loading news…".to_string(),
            tick: 0,
            next_activation: 2,
        }
    }

    /// The activation whose load is expected, if the news view is showing.
    pub fn news_activation(&self) -> Option<Activation> {
        match &self.screen {
            Screen::News(view) => Some(view.activation),
            Screen::Subjects(_) => None,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Replaces whatever is on screen with a fresh news view in `Loading`.
    pub fn open_news(&mut self) -> Activation {
        let activation = Activation(self.next_activation);
        self.next_activation += 1;
        self.screen = Screen::News(NewsView::new(activation));
        self.status = "Loading news…".to_string();
        info!(activation = activation.0, "news view opened");
        activation
    }

    pub fn open_subjects(&mut self) {
        self.screen = Screen::Subjects(SubjectsView::default());
        self.status = "Subjects. Enter to pick, Esc to go back.".to_string();
        info!("subjects view opened");
    }

    pub fn handle(&mut self, action: Action) -> Effect {
        let on_news = matches!(self.screen, Screen::News(_));
        match (on_news, action) {
            (_, Action::Quit) => return Effect::Quit,
            (true, Action::Subjects) => {
                self.open_subjects();
                return Effect::CancelLoad;
            }
            (false, Action::Back) => return Effect::StartLoad(self.open_news()),
            _ => {}
        }

        match &mut self.screen {
            Screen::News(view) => {
                handle_news(view, action);
                Effect::None
            }
            Screen::Subjects(view) => match action {
                Action::Down => {
                    view.selected = (view.selected + 1).min(subject_names().len() - 1);
                    Effect::None
                }
                Action::Up => {
                    view.selected = view.selected.saturating_sub(1);
                    Effect::None
                }
                Action::Select => {
                    let name = subject_names()[view.selected];
                    let notice = format!("{name}: coming soon");
                    self.status = notice.clone();
                    view.notice = Some(notice);
                    Effect::None
                }
                _ => Effect::None,
            },
        }
    }

    /// Resolves the pending load of `activation`. Results for any other
    /// activation, or arriving after the view left `Loading`, are ignored.
    pub fn apply_load(
        &mut self,
        activation: Activation,
        result: Result<Vec<NewsItem>, LoadError>,
    ) {
        let view = match &mut self.screen {
            Screen::News(view)
                if view.activation == activation && matches!(view.state, LoadState::Loading) =>
            {
                view
            }
            _ => {
                debug!(activation = activation.0, "dropping stale load result");
                return;
            }
        };

        match result {
            Ok(items) => {
                self.status = match items.len() {
                    0 => "Nothing to show.".to_string(),
                    1 => "Loaded 1 story".to_string(),
                    n => format!("Loaded {n} stories"),
                };
                view.state = LoadState::Loaded(items);
            }
            Err(e) => {
                warn!(error = %e, "news load failed");
                self.status = "Load failed. Press s then Esc to reopen.".to_string();
                view.state = LoadState::Failed(e.to_string());
            }
        }
    }
}

fn handle_news(view: &mut NewsView, action: Action) {
    let len = view.items().len();
    if len == 0 {
        return;
    }

    if view.detail_open {
        match action {
            Action::Back | Action::Select => view.detail_open = false,
            Action::Down => {
                let last = view.detail_line_count().saturating_sub(1);
                view.detail_scroll = (view.detail_scroll + 1).min(last);
            }
            Action::Up => view.detail_scroll = view.detail_scroll.saturating_sub(1),
            _ => {}
        }
        return;
    }

    match action {
        Action::Down => view.selected = (view.selected + 1).min(len - 1),
        Action::Up => view.selected = view.selected.saturating_sub(1),
        Action::Select => {
            if let Some(item) = view.selected_item() {
                debug!(id = %item.id, "opening story");
            }
            view.detail_open = true;
            view.detail_scroll = 0;
        }
        _ => {}
    }
}
