use std::sync::Arc;

use common::{
    listing::{FetchRequest, ListView},
    network::NetworkClient,
};
use iced::{Alignment, Border, Font, Length, Theme, alignment, font::Weight, widget};
use tracing::error;

use crate::icons;

use super::{ListMessage, Listable};

#[derive(Debug)]
pub struct ListWidget<R> {
    view: ListView<R>,
    network: Arc<NetworkClient>,
}

impl<R: Listable> ListWidget<R> {
    pub fn new(network: Arc<NetworkClient>, page_size: u32) -> Self {
        Self {
            view: ListView::new(page_size),
            network,
        }
    }

    fn perform(&self, req: FetchRequest) -> iced::Task<ListMessage<R>> {
        let FetchRequest { token, params } = req;
        iced::Task::perform(R::fetch(self.network.clone(), params), move |output| {
            ListMessage::Fetched(token, output.map_err(|e| format!("{:#}", e)))
        })
    }

    fn perform_opt(&self, req: Option<FetchRequest>) -> iced::Task<ListMessage<R>> {
        match req {
            Some(req) => self.perform(req),
            None => iced::Task::none(),
        }
    }

    pub fn update(&mut self, message: ListMessage<R>) -> iced::Task<ListMessage<R>> {
        match message {
            ListMessage::Mount => {
                let req = self.view.mount();
                self.perform(req)
            }
            ListMessage::QueryChanged(query) => {
                let req = self.view.set_query(query);
                self.perform(req)
            }
            ListMessage::SelectPage(page) => {
                let req = self.view.select_page(page);
                self.perform_opt(req)
            }
            ListMessage::NextPage => {
                let req = self.view.next_page();
                self.perform_opt(req)
            }
            ListMessage::PreviousPage => {
                let req = self.view.previous_page();
                self.perform_opt(req)
            }
            ListMessage::Fetched(token, result) => {
                if let Err(e) = &result {
                    error!("Failed to fetch {}: {}", R::TITLE, e);
                }
                self.view.apply(token, result);
                iced::Task::none()
            }
        }
    }

    pub fn view(&self) -> iced::Element<'_, ListMessage<R>> {
        let header = widget::row![
            widget::text(R::TITLE).size(20.0).width(Length::Fill),
            search_bar(R::PLACEHOLDER, self.view.query(), ListMessage::QueryChanged),
        ]
        .spacing(16.0)
        .align_y(alignment::Vertical::Center);

        widget::container(
            widget::column![
                header,
                widget::horizontal_rule(4.0),
                self.table(),
                widget::horizontal_rule(4.0),
                self.pagination(),
            ]
            .spacing(8.0),
        )
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

    fn table(&self) -> iced::Element<'_, ListMessage<R>> {
        let columns = R::columns();
        let mut header = widget::Row::new().spacing(16.0);
        for (title, width) in &columns {
            header = header.push(table_header(*title).width(*width));
        }
        header = header.push(table_header("").width(80.0));

        let mut rows: Vec<iced::Element<'_, ListMessage<R>>> = vec![header.into()];
        rows.extend(self.view.rows().iter().map(|r| {
            let mut row = widget::Row::new()
                .spacing(16.0)
                .align_y(Alignment::Center);
            for ((_, width), cell) in columns.iter().zip(r.cells()) {
                row = row.push(widget::text(cell).width(*width));
            }
            // Row actions are rendered but have no handler yet.
            row = row.push(
                widget::row![
                    widget::button(widget::svg(icons::edit()).width(16.0).height(16.0))
                        .style(widget::button::secondary),
                    widget::button(widget::svg(icons::delete()).width(16.0).height(16.0))
                        .style(widget::button::danger),
                ]
                .spacing(4.0)
                .width(80.0),
            );
            row.into()
        }));
        widget::scrollable(widget::column(rows).spacing(8.0))
            .height(Length::Fill)
            .into()
    }

    fn pagination(&self) -> iced::Element<'_, ListMessage<R>> {
        let pagination = self.view.pagination();
        let mut bar = widget::Row::new()
            .spacing(4.0)
            .align_y(Alignment::Center)
            .push(page_control("«", pagination.previous_disabled, ListMessage::PreviousPage));
        for link in &pagination.links {
            bar = bar.push(
                widget::button(widget::text(link.page.to_string()))
                    .on_press(ListMessage::SelectPage(link.page))
                    .style(if link.active {
                        widget::button::primary
                    } else {
                        widget::button::secondary
                    }),
            );
        }
        bar = bar.push(page_control("»", pagination.next_disabled, ListMessage::NextPage));
        widget::container(bar).center_x(Length::Fill).into()
    }
}

/// Previous/next control. A disabled control only looks disabled; pressing
/// it is still delivered and ignored by the list state.
fn page_control<'a, M: Clone + 'a>(
    label: &'a str,
    disabled: bool,
    on_press: M,
) -> iced::Element<'a, M> {
    widget::button(widget::text(label))
        .on_press(on_press)
        .style(move |theme: &Theme, status| {
            let mut style = widget::button::secondary(theme, status);
            if disabled {
                let palette = theme.extended_palette();
                style.background = Some(palette.background.base.color.into());
                style.text_color = palette.background.strong.color;
            }
            style
        })
        .into()
}

/// Search input owned by the caller's state; every edit goes to `on_input`.
pub fn search_bar<'a, M: Clone + 'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
) -> iced::Element<'a, M> {
    widget::row![
        widget::text_input(placeholder, value)
            .on_input(on_input)
            .width(280.0),
        widget::svg(icons::search()).width(16.0).height(16.0),
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Center)
    .into()
}

pub fn table_header(label: &str) -> widget::Text {
    let mut bold = Font::DEFAULT;
    bold.weight = Weight::Bold;
    widget::text(label).font(bold).style(|theme: &Theme| {
        let palette = theme.extended_palette();
        widget::text::Style {
            color: palette.primary.strong.color.into(),
        }
    })
}
