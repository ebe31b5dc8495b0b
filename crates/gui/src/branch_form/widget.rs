use std::sync::Arc;

use common::{
    branch_form::{BranchField, BranchForm},
    network::NetworkClient,
    notice::Notice,
    services::Outcome,
};
use iced::{Border, Length, Theme, widget};
use tracing::{debug, error};

use super::Msg;

#[derive(Debug)]
pub struct BranchFormWidget {
    form: BranchForm,
    network: Arc<NetworkClient>,
}

impl BranchFormWidget {
    pub fn new(network: Arc<NetworkClient>) -> Self {
        Self {
            form: BranchForm::new(),
            network,
        }
    }

    pub fn update(&mut self, msg: Msg) -> iced::Task<Msg> {
        match msg {
            Msg::Input(field, value) => {
                self.form.input(field, value);
                iced::Task::none()
            }
            Msg::Submit => match self.form.begin_submit() {
                Ok(pending) => {
                    let network = self.network.clone();
                    iced::Task::perform(
                        async move { network.register_store_branch(&pending).await },
                        |output| {
                            Msg::Finished(
                                output
                                    .map(|outcome| {
                                        if let Outcome::RequestError(Some(details)) = &outcome {
                                            debug!("Registration rejected: {}", details);
                                        }
                                        outcome.kind()
                                    })
                                    .map_err(|e| format!("{:#}", e)),
                            )
                        },
                    )
                }
                Err(e) => iced::Task::done(Msg::Notify(Notice::from(e))),
            },
            Msg::Finished(result) => {
                let notice = self.form.finish_submit(result);
                iced::Task::done(Msg::Notify(notice))
            }
            Msg::Notify(_) => {
                error!("Notify should be consumed by parent");
                iced::Task::none()
            }
        }
    }

    pub fn view(&self) -> iced::Element<'_, Msg> {
        let submit = if self.form.is_submitting() {
            widget::button("Registering...").width(Length::Fill)
        } else {
            widget::button("Register")
                .width(Length::Fill)
                .on_press(Msg::Submit)
        };

        widget::container(
            widget::column![
                widget::text("New store branch").size(20.0),
                widget::horizontal_rule(4.0),
                field("Name", &self.form.name, BranchField::Name),
                field("Address", &self.form.address, BranchField::Address),
                widget::row![
                    field("Latitude", &self.form.latitude, BranchField::Latitude),
                    field("Longitude", &self.form.longitude, BranchField::Longitude),
                ]
                .spacing(8.0),
                widget::row![
                    field(
                        "Opening hours",
                        &self.form.opening_hours,
                        BranchField::OpeningHours
                    ),
                    field(
                        "Closing hours",
                        &self.form.closing_hours,
                        BranchField::ClosingHours
                    ),
                ]
                .spacing(8.0),
                submit,
            ]
            .spacing(12.0)
            .max_width(480.0),
        )
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            widget::container::Style {
                text_color: Some(palette.background.weak.text),
                background: Some(palette.background.weak.color.into()),
                border: Border::default().rounded(8.0),
                ..Default::default()
            }
        })
        .padding(16.0)
        .into()
    }
}

fn field<'a>(label: &'a str, value: &'a str, branch_field: BranchField) -> iced::Element<'a, Msg> {
    widget::column![
        widget::text(label),
        widget::text_input("", value).on_input(move |s| Msg::Input(branch_field, s)),
    ]
    .spacing(4.0)
    .width(Length::Fill)
    .into()
}
