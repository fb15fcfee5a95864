use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::Theme;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = app.title();
    frame.render_widget(Header::new(&title).widget(theme), header);
    frame.render_widget(Clear, body);
    match app.detail() {
        Some(detail) => detail.draw(frame, body, app.tick()),
        None => app.home().draw(frame, body, app.tick()),
    }
    frame.render_widget(Footer::new(app.screen()).widget(footer, theme), footer);
}
