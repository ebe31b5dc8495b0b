use iced::widget::svg;

const SVG_SEARCH: &[u8] = include_bytes!("../assets/icons/search.svg");
const SVG_EDIT: &[u8] = include_bytes!("../assets/icons/edit.svg");
const SVG_DELETE: &[u8] = include_bytes!("../assets/icons/delete.svg");

pub fn search() -> svg::Handle {
    svg::Handle::from_memory(SVG_SEARCH)
}

pub fn edit() -> svg::Handle {
    svg::Handle::from_memory(SVG_EDIT)
}

pub fn delete() -> svg::Handle {
    svg::Handle::from_memory(SVG_DELETE)
}
