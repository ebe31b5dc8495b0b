use std::sync::Arc;

use common::{
    network::NetworkClient,
    notice::Notice,
    payment::{CardField, PaymentForm},
};
use iced::{Border, Length, Theme, widget};
use tracing::error;

use super::Msg;

#[derive(Debug)]
pub struct PaymentWidget {
    form: PaymentForm,
    network: Arc<NetworkClient>,
}

impl PaymentWidget {
    pub fn new(network: Arc<NetworkClient>) -> Self {
        Self {
            form: PaymentForm::new(),
            network,
        }
    }

    pub fn update(&mut self, msg: Msg) -> iced::Task<Msg> {
        match msg {
            Msg::Input(field, raw) => {
                self.form.input(field, &raw);
                iced::Task::none()
            }
            Msg::Submit => match self.form.begin_submit() {
                Ok(payment) => {
                    let network = self.network.clone();
                    iced::Task::perform(
                        async move { network.submit_payment(&payment).await },
                        |output| {
                            Msg::Finished(
                                output
                                    .map(|outcome| outcome.kind())
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
            widget::button("Processing...").width(Length::Fill)
        } else {
            widget::button("Pay")
                .width(Length::Fill)
                .on_press(Msg::Submit)
        };

        widget::container(
            widget::column![
                widget::text("Payment").size(20.0),
                widget::horizontal_rule(4.0),
                field(
                    "Card number",
                    "0000 0000 0000 0000",
                    &self.form.card_number,
                    "Never share your card number with anyone.",
                    CardField::Number,
                ),
                field(
                    "Card holder",
                    "",
                    &self.form.card_name,
                    "Name and surname as printed on the card.",
                    CardField::Name,
                ),
                field(
                    "Expiration date",
                    "MM/YY",
                    &self.form.card_expiration,
                    "Month and year the card expires.",
                    CardField::Expiration,
                ),
                field(
                    "CVV",
                    "000",
                    &self.form.card_cvv,
                    "Security code on the back of the card.",
                    CardField::Cvv,
                ),
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

fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    help: &'a str,
    card_field: CardField,
) -> iced::Element<'a, Msg> {
    widget::column![
        widget::text(label),
        widget::text_input(placeholder, value).on_input(move |s| Msg::Input(card_field, s)),
        widget::text(help).size(12.0).style(|theme: &Theme| {
            let palette = theme.extended_palette();
            widget::text::Style {
                color: palette.secondary.strong.color.into(),
            }
        }),
    ]
    .spacing(4.0)
    .into()
}
