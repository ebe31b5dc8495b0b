use anyhow::{Result, anyhow, bail};
use std::str::FromStr;

use keybinds::Keybinds;
use logos::Logos;
use strum::EnumString;

use common::services::DEFAULT_PAGE_SIZE;

use crate::app::{AppMessage, AppTab};

use super::ThemeChoice;

pub const DEFAULT_CONFIG: &str = include_str!("../../assets/default.conf");

#[derive(Debug, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum BindableMessage {
    ProductsTab,
    BranchesTab,
    NewBranchTab,
    PaymentTab,
    NextPage,
    PreviousPage,
    ToggleTheme,
    Quit,
}

impl From<BindableMessage> for AppMessage {
    fn from(value: BindableMessage) -> Self {
        match value {
            BindableMessage::ProductsTab => AppMessage::Tab(AppTab::Products),
            BindableMessage::BranchesTab => AppMessage::Tab(AppTab::Branches),
            BindableMessage::NewBranchTab => AppMessage::Tab(AppTab::NewBranch),
            BindableMessage::PaymentTab => AppMessage::Tab(AppTab::Payment),
            BindableMessage::NextPage => AppMessage::NextPage,
            BindableMessage::PreviousPage => AppMessage::PreviousPage,
            BindableMessage::ToggleTheme => AppMessage::ToggleTheme,
            BindableMessage::Quit => AppMessage::Quit,
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub keyboard: Keybinds<BindableMessage>,
    pub server: Option<String>,
    pub page_size: u32,
    pub theme: ThemeChoice,
}

impl Config {
    pub fn new() -> Self {
        Config {
            keyboard: Keybinds::new(vec![]),
            server: None,
            page_size: DEFAULT_PAGE_SIZE,
            theme: ThemeChoice::Dark,
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = s.chars().filter(|&c| c != '\r').collect::<String>();
        let lexer = Token::lexer(&sanitized);

        let mut statements: Vec<Vec<String>> = vec![vec![]];
        for token in lexer {
            match token {
                Ok(Token::String(s)) => {
                    if let Some(current) = statements.last_mut() {
                        current.push(s);
                    }
                }
                Ok(Token::StatementDelim) => statements.push(vec![]),
                Ok(Token::ArgDelim) => {}
                Err(_) => bail!("Unreadable configuration"),
            }
        }

        let mut out = Config::new();
        for (line, words) in statements.iter().enumerate() {
            let Some((name, args)) = words.split_first() else {
                continue;
            };
            let line = line + 1;
            let cmd = Command::from_str(name)
                .map_err(|_| anyhow!("Line {}: unknown command {}", line, name))?;
            match cmd {
                Command::Bind => {
                    // Everything before the action is the key sequence.
                    let Some((action, keys)) = args.split_last() else {
                        bail!("Line {}: Bind requires a key sequence and an action", line);
                    };
                    if keys.is_empty() {
                        bail!("Line {}: Bind requires a key sequence and an action", line);
                    }
                    let action = BindableMessage::from_str(action)
                        .map_err(|_| anyhow!("Line {}: unknown action {}", line, action))?;
                    let keys = keys.join(" ");
                    out.keyboard
                        .bind(&keys, action)
                        .map_err(|e| anyhow!("Line {}: bad key sequence {}: {:?}", line, keys, e))?;
                }
                Command::SetServer => {
                    let [url] = args else {
                        bail!("Line {}: SetServer requires 1 argument", line);
                    };
                    out.server = Some(url.clone());
                }
                Command::PageSize => {
                    let [n] = args else {
                        bail!("Line {}: PageSize requires 1 argument", line);
                    };
                    let n: u32 = n
                        .parse()
                        .map_err(|_| anyhow!("Line {}: PageSize must be a number", line))?;
                    if n == 0 {
                        bail!("Line {}: PageSize must be at least 1", line);
                    }
                    out.page_size = n;
                }
                Command::Theme => {
                    let [choice] = args else {
                        bail!("Line {}: Theme requires 1 argument", line);
                    };
                    out.theme = ThemeChoice::from_str(choice)
                        .map_err(|_| anyhow!("Line {}: unknown theme {}", line, choice))?;
                }
            }
        }
        Ok(out)
    }
}

/// Represents valid tokens in a configuration file.
#[derive(Debug, Logos)]
enum Token {
    #[regex(" +")]
    ArgDelim,

    #[token("\n")]
    StatementDelim,

    #[regex("[^ \n]+", |lex| lex.slice().to_owned())]
    String(String),
}

#[derive(Debug, EnumString)]
enum Command {
    Bind,
    SetServer,
    PageSize,
    Theme,
}
