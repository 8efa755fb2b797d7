use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::calculator::{MAX_PEOPLE, MAX_TIP_PERCENT, MIN_PEOPLE};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Breakdown, Slider, TitleBar};
use crate::tui::{Focus, TuiState};

const FOOTER_HINT: &str = "Tab focus · ←/→ adjust · Ctrl+S split bill · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let mut breakdown = Breakdown::new(
        app.breakdown.tip_display.clone(),
        app.breakdown.total_display.clone(),
        app.show_split
            .then(|| app.breakdown.per_person_display.clone()),
    );

    let split_height = if app.show_split { 3 } else { 0 };
    let layout = Layout::vertical([
        Length(1),                            // title bar
        Length(3),                            // amount field
        Length(3),                            // tip slider
        Length(split_height),                 // split slider (collapsed when hidden)
        Length(breakdown.required_height()),  // results
        Min(0),                               // spacer
        Length(1),                            // footer hints
    ]);
    let [title_area, amount_area, tip_area, split_area, breakdown_area, _spacer, footer_area] =
        layout.areas(frame.area());

    TitleBar::new(app.currency.symbol.clone(), app.status_message.clone())
        .render(frame, title_area);

    tui.amount_input.focused = tui.focus == Focus::Amount;
    tui.amount_input.render(frame, amount_area);

    let tip_percent = app.input.tip_percent;
    Slider::new(
        "Tip percentage",
        format!("{}%", tip_percent.round() as u32),
        tip_percent / MAX_TIP_PERCENT,
    )
    .focused(tui.focus == Focus::Tip)
    .render(frame, tip_area);

    if app.show_split {
        let people = app.input.people;
        Slider::new(
            "Number of people",
            people.to_string(),
            f64::from(people - MIN_PEOPLE) / f64::from(MAX_PEOPLE - MIN_PEOPLE),
        )
        .focused(tui.focus == Focus::Split)
        .render(frame, split_area);
    }

    breakdown.render(frame, breakdown_area);

    frame.render_widget(
        Span::styled(FOOTER_HINT, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}
