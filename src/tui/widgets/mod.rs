//! Widgets for the search screen

mod card_grid;
mod detail_modal;
mod search_bar;

pub use card_grid::CardGrid;
pub use detail_modal::DetailModal;
pub use search_bar::SearchBar;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
