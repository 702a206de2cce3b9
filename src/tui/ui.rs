use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::AppState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LoadingView, MovieGrid, TitleBar};

/// Columns reserved for the search box in the header row.
const SEARCH_BOX_WIDTH: u16 = 40;

pub fn draw_ui(frame: &mut Frame, state: &AppState, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // While a search is outstanding the loading placeholder replaces the
    // whole interface, search form included.
    if state.loading {
        LoadingView::new(spinner_frame).render(frame, frame.area());
        return;
    }

    let layout = Layout::vertical([Length(3), Min(0)]);
    let [header_area, grid_area] = layout.areas(frame.area());

    let header = Layout::horizontal([Min(0), Length(SEARCH_BOX_WIDTH)]);
    let [title_area, search_area] = header.areas(header_area);

    TitleBar::new(state.search_term.clone(), state.movies.len())
        .render(frame, centered_line(title_area));

    tui.search_box.render(frame, search_area);

    MovieGrid::new(&state.movies).render(frame, grid_area, &mut tui.grid);
}

/// Middle line of `area`, for vertically centering single-line text next
/// to the bordered search box.
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
