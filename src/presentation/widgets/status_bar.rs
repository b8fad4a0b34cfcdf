use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::{slide_controller::Playback, status_bar::StatusBar};

pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    /// Carousel playback, absent while it is unmounted
    playback: Option<Playback>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, playback: Option<Playback>) -> Self {
        Self {
            status_bar,
            playback,
        }
    }

    pub fn playback_label(&self) -> &'static str {
        match self.playback {
            Some(Playback::Running) => "▶ auto",
            Some(Playback::Paused) => "⏸ paused",
            Some(Playback::Disposed) | None => "",
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [message, indicator] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(10)]).areas(area);

        Paragraph::new(self.status_bar.message().unwrap_or_default())
            .render(message, buf);
        Paragraph::new(Span::styled(
            self.playback_label(),
            Style::default().fg(Color::Gray).italic(),
        ))
        .alignment(Alignment::Right)
        .render(indicator, buf);
    }
}
