use serde::{Deserialize, Serialize};
use std::fmt;

/// Known content libraries a scenario can embed
///
/// The catalog is closed: anything else parses to [`ContentType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    // Display and media types
    Accordion,
    Agamotto,
    Audio,
    AudioRecorder,
    Chart,
    Collage,
    Dialogcards,
    GuessTheAnswer,
    Table,
    IFrameEmbed,
    Image,
    ImageHotspots,
    Link,
    MemoryGame,
    Timeline,
    TwitterUserFeed,
    Video,
    PhetInteractiveSimulation,
    DocumentationTool,
    AdvancedText,
    DocumentsUpload,

    // Question types
    ImageHotspotQuestion,
    Blanks,
    Essay,
    SingleChoiceSet,
    MultiChoice,
    TrueFalse,
    DragQuestion,
    Summary,
    DragText,
    MarkTheWords,
    QuestionSet,

    // Containers that may or may not be scored
    InteractiveVideo,
    CoursePresentation,

    BranchingQuestion,
}

impl Library {
    pub const ALL: [Library; 35] = [
        Library::Accordion,
        Library::Agamotto,
        Library::Audio,
        Library::AudioRecorder,
        Library::Chart,
        Library::Collage,
        Library::Dialogcards,
        Library::GuessTheAnswer,
        Library::Table,
        Library::IFrameEmbed,
        Library::Image,
        Library::ImageHotspots,
        Library::Link,
        Library::MemoryGame,
        Library::Timeline,
        Library::TwitterUserFeed,
        Library::Video,
        Library::PhetInteractiveSimulation,
        Library::DocumentationTool,
        Library::AdvancedText,
        Library::DocumentsUpload,
        Library::ImageHotspotQuestion,
        Library::Blanks,
        Library::Essay,
        Library::SingleChoiceSet,
        Library::MultiChoice,
        Library::TrueFalse,
        Library::DragQuestion,
        Library::Summary,
        Library::DragText,
        Library::MarkTheWords,
        Library::QuestionSet,
        Library::InteractiveVideo,
        Library::CoursePresentation,
        Library::BranchingQuestion,
    ];

    /// Machine name as reported in the content's library info
    pub fn machine_name(self) -> &'static str {
        match self {
            Library::Accordion => "H5P.Accordion",
            Library::Agamotto => "H5P.Agamotto",
            Library::Audio => "H5P.Audio",
            Library::AudioRecorder => "H5P.AudioRecorder",
            Library::Chart => "H5P.Chart",
            Library::Collage => "H5P.Collage",
            Library::Dialogcards => "H5P.Dialogcards",
            Library::GuessTheAnswer => "H5P.GuessTheAnswer",
            Library::Table => "H5P.Table",
            Library::IFrameEmbed => "H5P.IFrameEmbed",
            Library::Image => "H5P.Image",
            Library::ImageHotspots => "H5P.ImageHotspots",
            Library::Link => "H5P.Link",
            Library::MemoryGame => "H5P.MemoryGame",
            Library::Timeline => "H5P.Timeline",
            Library::TwitterUserFeed => "H5P.TwitterUserFeed",
            Library::Video => "H5P.Video",
            Library::PhetInteractiveSimulation => "H5P.PhetInteractiveSimulation",
            Library::DocumentationTool => "H5P.DocumentationTool",
            Library::AdvancedText => "H5P.AdvancedText",
            Library::DocumentsUpload => "H5P.DocumentsUpload",
            Library::ImageHotspotQuestion => "H5P.ImageHotspotQuestion",
            Library::Blanks => "H5P.Blanks",
            Library::Essay => "H5P.Essay",
            Library::SingleChoiceSet => "H5P.SingleChoiceSet",
            Library::MultiChoice => "H5P.MultiChoice",
            Library::TrueFalse => "H5P.TrueFalse",
            Library::DragQuestion => "H5P.DragQuestion",
            Library::Summary => "H5P.Summary",
            Library::DragText => "H5P.DragText",
            Library::MarkTheWords => "H5P.MarkTheWords",
            Library::QuestionSet => "H5P.QuestionSet",
            Library::InteractiveVideo => "H5P.InteractiveVideo",
            Library::CoursePresentation => "H5P.CoursePresentation",
            Library::BranchingQuestion => "H5P.BranchingQuestion",
        }
    }

    /// Look up a library by machine name (version suffix already stripped)
    pub fn from_machine_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lib| lib.machine_name() == name)
    }

    /// Never produces a meaningful score
    pub fn is_read_only(self) -> bool {
        matches!(
            self,
            Library::Accordion
                | Library::Agamotto
                | Library::Audio
                | Library::AudioRecorder
                | Library::Chart
                | Library::Collage
                | Library::Dialogcards
                | Library::GuessTheAnswer
                | Library::Table
                | Library::IFrameEmbed
                | Library::Image
                | Library::ImageHotspots
                | Library::Link
                | Library::MemoryGame
                | Library::Timeline
                | Library::TwitterUserFeed
                | Library::Video
                | Library::PhetInteractiveSimulation
                | Library::DocumentationTool
                | Library::AdvancedText
                | Library::DocumentsUpload
        )
    }

    /// Known to produce a score
    ///
    /// `MemoryGame` and `DocumentationTool` sit in both catalogs; the
    /// read-only side wins for eligibility.
    pub fn is_task(self) -> bool {
        matches!(
            self,
            Library::ImageHotspotQuestion
                | Library::Blanks
                | Library::Essay
                | Library::SingleChoiceSet
                | Library::MultiChoice
                | Library::TrueFalse
                | Library::DragQuestion
                | Library::Summary
                | Library::DragText
                | Library::MarkTheWords
                | Library::MemoryGame
                | Library::QuestionSet
                | Library::InteractiveVideo
                | Library::CoursePresentation
                | Library::DocumentationTool
        )
    }

    /// Container types that only count when the instance itself is a task
    pub fn is_conditional(self) -> bool {
        matches!(self, Library::InteractiveVideo | Library::CoursePresentation)
    }
}

/// Content type tag of a sub-activity, resolved once from its machine name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Known(Library),
    Other(String),
}

impl ContentType {
    /// Parse a machine name such as `"H5P.MultiChoice"` or `"H5P.MultiChoice 1.16"`
    pub fn parse(machine_name: &str) -> Self {
        let name = machine_name.split_whitespace().next().unwrap_or_default();

        match Library::from_machine_name(name) {
            Some(library) => ContentType::Known(library),
            None => ContentType::Other(name.to_string()),
        }
    }

    pub fn library(&self) -> Option<Library> {
        match self {
            ContentType::Known(library) => Some(*library),
            ContentType::Other(_) => None,
        }
    }

    pub fn machine_name(&self) -> &str {
        match self {
            ContentType::Known(library) => library.machine_name(),
            ContentType::Other(name) => name,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.library().is_some_and(Library::is_read_only)
    }

    pub fn in_task_catalog(&self) -> bool {
        self.library().is_some_and(Library::is_task)
    }

    pub fn is_conditional(&self) -> bool {
        self.library().is_some_and(Library::is_conditional)
    }

    pub fn is_branching_question(&self) -> bool {
        self.library() == Some(Library::BranchingQuestion)
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        ContentType::parse(&value)
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        ContentType::parse(value)
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.machine_name().to_string()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.machine_name())
    }
}
