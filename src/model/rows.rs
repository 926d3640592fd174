//! In-memory row collection
//!
//! Rows keep their display order but are addressed by a locally assigned
//! `RowId`, never by position, so edits and deletes always hit the row the
//! user picked even if the collection changed in between.

use super::movie::Movie;
use std::fmt;

/// Local identity of a row in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie plus its row identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub movie: Movie,
}

/// Ordered rows currently displayed
#[derive(Debug, Default)]
pub struct RowCollection {
    rows: Vec<Row>,
    next_id: u64,
}

impl RowCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace every row with a freshly fetched page
    pub fn replace_all(&mut self, movies: Vec<Movie>) {
        let mut rows = Vec::with_capacity(movies.len());
        for movie in movies {
            rows.push(Row {
                id: self.allocate_id(),
                movie,
            });
        }
        self.rows = rows;
    }

    /// Append a row and return its id
    pub fn push(&mut self, movie: Movie) -> RowId {
        let id = self.allocate_id();
        self.rows.push(Row { id, movie });
        id
    }

    /// Replace the movie stored under `id`; returns false if the row is gone
    pub fn replace(&mut self, id: RowId, movie: Movie) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.movie = movie;
                true
            }
            None => false,
        }
    }

    /// Remove the row stored under `id`
    pub fn remove(&mut self, id: RowId) -> Option<Movie> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index).movie)
    }

    pub fn get(&self, id: RowId) -> Option<&Movie> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.movie)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.rows.iter().map(|row| &row.movie)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> Movie {
        Movie {
            title: format!("Movie {}", id),
            imdb_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_all_assigns_fresh_ids() {
        let mut rows = RowCollection::new();
        rows.replace_all(vec![movie("tt1"), movie("tt2")]);
        let first_ids: Vec<RowId> = rows.iter().map(|r| r.id).collect();

        rows.replace_all(vec![movie("tt3")]);

        assert_eq!(rows.len(), 1);
        assert!(!first_ids.iter().any(|id| rows.contains(*id)));
    }

    #[test]
    fn test_replace_by_id_keeps_order_and_length() {
        let mut rows = RowCollection::new();
        rows.replace_all(vec![movie("tt1"), movie("tt2"), movie("tt3")]);
        let target = rows.iter().nth(1).unwrap().id;

        assert!(rows.replace(target, movie("tt9")));

        let ids: Vec<&str> = rows.movies().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt9", "tt3"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = RowCollection::new();
        rows.replace_all(vec![movie("tt1"), movie("tt2")]);
        let target = rows.iter().next().unwrap().id;

        let removed = rows.remove(target).unwrap();

        assert_eq!(removed.imdb_id, "tt1");
        assert_eq!(rows.len(), 1);
        assert!(rows.remove(target).is_none());
        assert!(!rows.replace(target, movie("tt5")));
    }

    #[test]
    fn test_duplicate_imdb_ids_stay_addressable() {
        let mut rows = RowCollection::new();
        let a = rows.push(movie("tt1"));
        let b = rows.push(movie("tt1"));

        rows.remove(b);

        assert_eq!(rows.len(), 1);
        assert!(rows.contains(a));
    }
}
