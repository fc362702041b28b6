use crate::library::ReadStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize,
    ToggleHelp,

    // Board
    FocusNext,
    FocusPrev,
    FocusColumn(ReadStatus),
    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    ToggleStatus,
    ReloadCovers,

    // Add-book form
    OpenForm,
    CloseForm,
    FormNextField,
    FormPrevField,
    FormInput(char),
    FormBackspace,
    FormCycleStatus,
    SubmitForm,
}
