pub mod keymap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
pub enum ThemeChoice {
    Dark,
    Light,
}
