use common::{notice::Notice, payment::CardField, services::ResultKind};

pub mod widget;

#[derive(Debug, Clone)]
pub enum Msg {
    Input(CardField, String),
    Submit,
    Finished(Result<ResultKind, String>),
    Notify(Notice),
}
