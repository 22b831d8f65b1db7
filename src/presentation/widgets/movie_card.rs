use ratatui::prelude::*;

use crate::{
    domain::{
        movie::Movie,
        text::{format_count, truncate_to_width},
    },
    presentation::config::Styles,
};

/// One result entry: title, a rating/language/year line and the poster URL.
pub struct MovieCard<'a> {
    movie: &'a Movie,
    image_base_url: &'a str,
    styles: &'a Styles,
    width: usize,
}

impl<'a> MovieCard<'a> {
    pub const HEIGHT: u16 = 4;

    pub fn new(movie: &'a Movie, image_base_url: &'a str, styles: &'a Styles) -> Self {
        Self {
            movie,
            image_base_url,
            styles,
            width: usize::MAX,
        }
    }

    /// Columns available; longer lines are cut with an ellipsis.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn title(&self) -> Line<'static> {
        Line::styled(
            truncate_to_width(&self.movie.title, self.width),
            self.styles.get_or_default("title"),
        )
    }

    fn meta(&self) -> Line<'static> {
        let meta_style = self.styles.get_or_default("meta");
        let mut spans = vec![Span::styled(
            format!("★ {}", self.movie.rating_label()),
            self.styles.get_or_default("rating"),
        )];
        if self.movie.vote_count > 0 {
            spans.push(Span::styled(
                format!(" ({} votes)", format_count(self.movie.vote_count)),
                meta_style,
            ));
        }
        if let Some(language) = self.movie.language() {
            spans.push(Span::styled(format!(" • {language}"), meta_style));
        }
        if let Some(year) = self.movie.release_year() {
            spans.push(Span::styled(format!(" • {year}"), meta_style));
        }
        Line::from(spans)
    }

    fn poster(&self) -> Line<'static> {
        let text = self
            .movie
            .poster_url(self.image_base_url)
            .unwrap_or_else(|| "No poster".to_string());
        Line::styled(
            truncate_to_width(&text, self.width),
            self.styles.get_or_default("poster"),
        )
    }
}

impl From<MovieCard<'_>> for Text<'static> {
    fn from(card: MovieCard<'_>) -> Self {
        Text::from(vec![card.title(), card.meta(), card.poster(), Line::default()])
    }
}
