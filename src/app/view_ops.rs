use crate::error::AppResult;
use crate::ui;

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let form = &self.form;
        let message = self.status.message.as_str();
        let mut regions = None;
        session.draw(|frame| {
            let layout = ui::split_layout(frame.area());
            regions = Some(ui::draw_form(frame, &layout, form));
            ui::draw_chrome(frame, layout.status, form, message);
        })?;
        if let Some(regions) = regions {
            self.regions = regions;
        }
        Ok(())
    }
}
