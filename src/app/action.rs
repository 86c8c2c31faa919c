use crate::alerts::AlertKind;
use crate::app::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Refresh,
    Navigate(Route),
    SendAlert { kind: AlertKind, title: String, message: String },
    MarkRead { id: String },
    MarkAllRead,
    Quit,
}
