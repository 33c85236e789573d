/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FileOpen,
    FileSave,
    CheckSpelling,
    FileExit,
    WindowClose,
}
