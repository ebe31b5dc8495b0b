use common::{branch_form::BranchField, notice::Notice, services::ResultKind};

pub mod widget;

#[derive(Debug, Clone)]
pub enum Msg {
    Input(BranchField, String),
    Submit,
    Finished(Result<ResultKind, String>),
    Notify(Notice),
}
