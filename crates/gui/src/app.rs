use std::sync::Arc;

use common::{
    models::{Product, StoreBranch},
    network::NetworkClient,
    notice::Notice,
};
use iced::{Alignment, Border, Length, Subscription, Theme, keyboard, widget};

use crate::{
    branch_form::{self, widget::BranchFormWidget},
    listing::{ListMessage, widget::ListWidget},
    payment::{self, widget::PaymentWidget},
    settings::{ThemeChoice, keymap::Config},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Products,
    Branches,
    NewBranch,
    Payment,
}

impl AppTab {
    const ALL: [AppTab; 4] = [
        AppTab::Products,
        AppTab::Branches,
        AppTab::NewBranch,
        AppTab::Payment,
    ];

    fn label(self) -> &'static str {
        match self {
            AppTab::Products => "Products",
            AppTab::Branches => "Store branches",
            AppTab::NewBranch => "New branch",
            AppTab::Payment => "Payment",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub dark_mode: bool,
    tab: AppTab,
    config: Config,
    products: ListWidget<Product>,
    branches: ListWidget<StoreBranch>,
    new_branch: BranchFormWidget,
    payment: PaymentWidget,
    notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    Tab(AppTab),
    Products(ListMessage<Product>),
    Branches(ListMessage<StoreBranch>),
    NewBranch(branch_form::Msg),
    Payment(payment::Msg),
    NextPage,
    PreviousPage,
    DismissNotice,
    Keyboard(keyboard::Event),
    ToggleTheme,
    Quit,
}

impl App {
    pub fn new(config: Config, network: Arc<NetworkClient>) -> Self {
        Self {
            dark_mode: config.theme == ThemeChoice::Dark,
            tab: AppTab::default(),
            products: ListWidget::new(network.clone(), config.page_size),
            branches: ListWidget::new(network.clone(), config.page_size),
            new_branch: BranchFormWidget::new(network.clone()),
            payment: PaymentWidget::new(network),
            notice: None,
            config,
        }
    }

    /// Both lists load as soon as the window opens.
    pub fn boot(config: Config, network: Arc<NetworkClient>) -> (Self, iced::Task<AppMessage>) {
        (
            Self::new(config, network),
            iced::Task::batch([
                iced::Task::done(AppMessage::Products(ListMessage::Mount)),
                iced::Task::done(AppMessage::Branches(ListMessage::Mount)),
            ]),
        )
    }

    pub fn update(&mut self, message: AppMessage) -> iced::Task<AppMessage> {
        match message {
            AppMessage::Tab(tab) => {
                self.tab = tab;
                iced::Task::none()
            }
            AppMessage::Products(msg) => self.products.update(msg).map(AppMessage::Products),
            AppMessage::Branches(msg) => self.branches.update(msg).map(AppMessage::Branches),
            AppMessage::NewBranch(branch_form::Msg::Notify(notice)) => {
                let refresh = notice == Notice::BranchRegistered;
                self.notice = Some(notice);
                if refresh {
                    iced::Task::done(AppMessage::Branches(ListMessage::Mount))
                } else {
                    iced::Task::none()
                }
            }
            AppMessage::NewBranch(msg) => self.new_branch.update(msg).map(AppMessage::NewBranch),
            AppMessage::Payment(payment::Msg::Notify(notice)) => {
                self.notice = Some(notice);
                iced::Task::none()
            }
            AppMessage::Payment(msg) => self.payment.update(msg).map(AppMessage::Payment),
            AppMessage::NextPage => match self.tab {
                AppTab::Products => iced::Task::done(AppMessage::Products(ListMessage::NextPage)),
                AppTab::Branches => iced::Task::done(AppMessage::Branches(ListMessage::NextPage)),
                _ => iced::Task::none(),
            },
            AppMessage::PreviousPage => match self.tab {
                AppTab::Products => {
                    iced::Task::done(AppMessage::Products(ListMessage::PreviousPage))
                }
                AppTab::Branches => {
                    iced::Task::done(AppMessage::Branches(ListMessage::PreviousPage))
                }
                _ => iced::Task::none(),
            },
            AppMessage::DismissNotice => {
                self.notice = None;
                iced::Task::none()
            }
            AppMessage::Keyboard(event) => match self.config.keyboard.dispatch(event) {
                Some(action) => iced::Task::done(AppMessage::from(*action)),
                None => iced::Task::none(),
            },
            AppMessage::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                iced::Task::none()
            }
            AppMessage::Quit => iced::exit(),
        }
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Keyboard(e) => Some(AppMessage::Keyboard(e)),
            _ => None,
        })
    }

    pub fn view(&self) -> iced::Element<'_, AppMessage> {
        let mut tabs = widget::Row::new().spacing(4.0);
        for tab in AppTab::ALL {
            tabs = tabs.push(
                widget::button(tab.label())
                    .on_press(AppMessage::Tab(tab))
                    .style(if tab == self.tab {
                        widget::button::primary
                    } else {
                        widget::button::secondary
                    }),
            );
        }

        let content: iced::Element<'_, AppMessage> = match &self.notice {
            Some(notice) => notice_view(notice),
            None => match self.tab {
                AppTab::Products => self.products.view().map(AppMessage::Products),
                AppTab::Branches => self.branches.view().map(AppMessage::Branches),
                AppTab::NewBranch => self.new_branch.view().map(AppMessage::NewBranch),
                AppTab::Payment => self.payment.view().map(AppMessage::Payment),
            },
        };

        widget::column![tabs, content]
            .spacing(8.0)
            .padding(16.0)
            .into()
    }
}

/// Takes over the content area until dismissed.
fn notice_view(notice: &Notice) -> iced::Element<'_, AppMessage> {
    let failure = notice.is_failure();
    widget::container(
        widget::column![
            widget::text(notice.message()).size(18.0),
            widget::button("OK").on_press(AppMessage::DismissNotice),
        ]
        .spacing(16.0)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let accent = if failure {
            palette.danger.base.color
        } else {
            palette.success.base.color
        };
        widget::container::Style {
            text_color: Some(palette.background.weak.text),
            background: Some(palette.background.weak.color.into()),
            border: Border {
                color: accent,
                width: 2.0,
                radius: iced::border::Radius::from(8.0),
            },
            ..Default::default()
        }
    })
    .into()
}
