//! Catalog service: book listing and detail with derived availability

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{
        book::{AvailabilityStatus, BookDetails, BookQuery, BookWithStatus},
        copy::BookCopy,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books matching the optional free-text filter, each with its
    /// derived availability. Copies for the whole result set are loaded in
    /// one batch query and grouped by book.
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookWithStatus>> {
        let books = self.repository.books.search(query.q.as_deref()).await?;

        let book_ids: Vec<i32> = books.iter().map(|b| b.id).collect();
        let copies = self.repository.copies.list_by_books(&book_ids).await?;

        let mut by_book: HashMap<i32, Vec<BookCopy>> = HashMap::new();
        for copy in copies {
            by_book.entry(copy.book_id).or_default().push(copy);
        }

        let result = books
            .into_iter()
            .map(|book| {
                let copies = by_book.remove(&book.id).unwrap_or_default();
                let status = AvailabilityStatus::from_copies(copies.iter().map(|c| c.status));
                BookWithStatus { book, status }
            })
            .collect();

        Ok(result)
    }

    /// Get a book with its copies and derived availability
    pub async fn get_book(&self, id: i32) -> AppResult<BookDetails> {
        let book = self.repository.books.get_by_id(id).await?;
        let copies = self.repository.copies.list_by_book(book.id).await?;
        let status = AvailabilityStatus::from_copies(copies.iter().map(|c| c.status));

        Ok(BookDetails {
            book,
            status,
            copies,
        })
    }
}
