use ratatui::prelude::*;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Loading indicator; advances one frame per tick.
#[derive(Debug, Clone)]
pub struct Spinner<'a> {
    tick: u64,
    label: &'a str,
    style: Style,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            label: "Loading...",
            style: Style::default(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(vec![
            Span::styled(self.frame(), self.style),
            Span::raw(" "),
            Span::raw(self.label),
        ])
        .render(area, buf);
    }
}
