use crate::error::DetectError;

/// One uploaded file: its name for display, its bytes for inference. Lives
/// only as long as the session.
#[derive(Clone)]
pub struct UploadedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detect,
}

/// The detect screen's situation, as one tagged value. Keeping it a single
/// enum rules out combinations like "running and failed at once".
#[derive(Debug, Clone, Default)]
pub enum Analysis {
    #[default]
    Idle,
    Running,
    Done(String),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub screen: Screen,
    pub image: Option<UploadedImage>,
    pub analysis: Analysis,
}

#[derive(Debug)]
pub enum Event {
    NavigateHome,
    NavigateDetect,
    ImageUploaded(UploadedImage),
    AnalyzePressed,
    AnalyzeDone(Result<String, DetectError>),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Analyze { image: UploadedImage },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        // Navigation toggles the screen and nothing else; a prior result
        // survives leaving and re-entering the detect screen.
        Event::NavigateHome => (
            State {
                screen: Screen::Home,
                ..state
            },
            vec![],
        ),
        Event::NavigateDetect => (
            State {
                screen: Screen::Detect,
                ..state
            },
            vec![],
        ),

        Event::ImageUploaded(image) => {
            // A new upload clears a stale failure but keeps a prior result.
            let analysis = match state.analysis {
                Analysis::Failed(_) => Analysis::Idle,
                other => other,
            };
            (
                State {
                    image: Some(image),
                    analysis,
                    ..state
                },
                vec![],
            )
        }

        Event::AnalyzePressed => match (&state.image, &state.analysis) {
            // One analysis at a time.
            (Some(_), Analysis::Running) => (state, vec![]),
            (Some(image), _) => {
                let image = image.clone();
                (
                    State {
                        analysis: Analysis::Running,
                        ..state
                    },
                    vec![Effect::Analyze { image }],
                )
            }
            (None, _) => (state, vec![]),
        },

        Event::AnalyzeDone(Ok(label)) => (
            State {
                analysis: Analysis::Done(label),
                ..state
            },
            vec![],
        ),
        Event::AnalyzeDone(Err(e)) => (
            State {
                analysis: Analysis::Failed(e.to_string()),
                ..state
            },
            vec![],
        ),
    }
}
