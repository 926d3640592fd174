//! Fixed grid column set

use super::movie::Movie;

/// A column of the movie grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Title,
    Year,
    ImdbId,
    Type,
    Poster,
}

impl Column {
    /// All columns in definition order (also the CSV header order)
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Year,
        Column::ImdbId,
        Column::Type,
        Column::Poster,
    ];

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Year => "Year",
            Column::ImdbId => "imdbID",
            Column::Type => "Type",
            Column::Poster => "Poster",
        }
    }

    /// Whether the column can be edited in the edit dialog
    pub fn is_editable(&self) -> bool {
        !matches!(self, Column::ImdbId)
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, Column::ImdbId)
    }

    /// Whether the column may be moved by column reordering
    pub fn is_reorderable(&self) -> bool {
        !matches!(self, Column::ImdbId)
    }

    /// Whether the grid offers copy-to-clipboard on this column
    pub fn is_copyable(&self) -> bool {
        matches!(self, Column::Title)
    }

    /// Read the column's value from a movie
    pub fn value<'a>(&self, movie: &'a Movie) -> &'a str {
        match self {
            Column::Title => &movie.title,
            Column::Year => &movie.year,
            Column::ImdbId => &movie.imdb_id,
            Column::Type => &movie.kind,
            Column::Poster => &movie.poster,
        }
    }

    /// Write the column's value into a movie
    pub fn set_value(&self, movie: &mut Movie, value: String) {
        match self {
            Column::Title => movie.title = value,
            Column::Year => movie.year = value,
            Column::ImdbId => movie.imdb_id = value,
            Column::Type => movie.kind = value,
            Column::Poster => movie.poster = value,
        }
    }

    /// Relative display width in percent
    pub fn width_percent(&self) -> u16 {
        match self {
            Column::Title => 34,
            Column::Year => 10,
            Column::ImdbId => 13,
            Column::Type => 10,
            Column::Poster => 33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_definition_order() {
        let labels: Vec<&str> = Column::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Title", "Year", "imdbID", "Type", "Poster"]);
    }

    #[test]
    fn test_imdb_id_is_locked() {
        assert!(!Column::ImdbId.is_editable());
        assert!(!Column::ImdbId.is_sortable());
        assert!(!Column::ImdbId.is_reorderable());
        assert!(Column::Poster.is_editable());
    }

    #[test]
    fn test_value_round_trip_through_accessors() {
        let mut movie = Movie::default();
        for column in Column::ALL {
            column.set_value(&mut movie, format!("{}-value", column.label()));
        }
        assert_eq!(movie.title, "Title-value");
        assert_eq!(Column::ImdbId.value(&movie), "imdbID-value");
        assert_eq!(Column::Type.value(&movie), "Type-value");
    }
}
